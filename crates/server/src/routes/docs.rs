//! Machine-readable API description served at `/docs`.
//!
//! The schemas below describe the wire shapes only; handlers read bodies
//! through [`BodyFields`](crate::extract::BodyFields) and relay vendor
//! payloads untouched.

use axum::Json;
use serde::Serialize;
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa::{OpenApi, ToSchema};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Face Detection API",
        version = "1.0.0",
        description = "Provides information about faces in an image by relaying to a cloud face service"
    ),
    paths(
        crate::routes::detect::detect_face,
        crate::routes::detect::detect_face_landmarks,
        crate::routes::detect::detect_face_emotions,
        crate::routes::similar::find_similar,
    ),
    components(schemas(
        ImageUrlBody,
        ImageUrlPairBody,
        FaceDoc,
        FaceRectangleDoc,
        VerificationDoc,
        NoFaceBody,
        BadRequestBody,
        VendorErrorBody,
        VendorErrorDetail,
    )),
    tags((name = "faces", description = "Face detection and comparison"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi() -> Json<OpenApiDocument> {
    Json(ApiDoc::openapi())
}

/// Body of the single-image endpoints (JSON or form-encoded)
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrlBody {
    /// URL of the image, reachable by the face service
    #[schema(example = "https://example.com/portrait.jpg")]
    pub image_url: String,
}

/// Body of `/findsimilar`
#[derive(Serialize, ToSchema)]
pub struct ImageUrlPairBody {
    /// URL of the first image
    #[serde(rename = "imageUrl1")]
    pub image_url1: String,
    /// URL of the image compared with the first
    #[serde(rename = "imageUrl2")]
    pub image_url2: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaceRectangleDoc {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

/// One detected face. Landmark and attribute objects appear only for the
/// endpoints that request them.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaceDoc {
    /// Short-lived vendor face id (`/detectface` only)
    pub face_id: Option<String>,
    pub face_rectangle: FaceRectangleDoc,
    #[schema(value_type = Option<Object>)]
    pub face_landmarks: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub face_attributes: Option<serde_json::Value>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDoc {
    pub is_identical: bool,
    #[schema(example = 0.9)]
    pub confidence: f64,
}

/// Returned with 200 when the image has no face
#[derive(Serialize, ToSchema)]
pub struct NoFaceBody {
    #[schema(example = "No face detected")]
    pub face: String,
}

#[derive(Serialize, ToSchema)]
pub struct BadRequestBody {
    #[schema(example = "Bad Request")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct VendorErrorBody {
    pub error: VendorErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct VendorErrorDetail {
    #[schema(example = "VENDOR_ERROR")]
    pub code: String,
    pub message: String,
    /// `stage` plus `vendor_status`/`vendor_body` when the vendor answered
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
}
