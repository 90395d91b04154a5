//! Single-image detection endpoints.
//!
//! All three share one flow (validate, one vendor call, normalize) and differ
//! only in the detection mode requested from the face service.

use super::docs::{BadRequestBody, FaceDoc, ImageUrlBody, VendorErrorBody};
use crate::error::ServerResult;
use crate::extract::BodyFields;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use facegate::{detect_faces, DetectMode, NormalizedResponse};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Detect faces and return their ids and rectangles.
#[utoipa::path(
    post,
    path = "/detectface",
    tag = "faces",
    request_body(content = ImageUrlBody, description = "URL of the image to scan"),
    responses(
        (status = 200, description = "Faces found in the image, or the no-face sentinel", body = [FaceDoc]),
        (status = 400, description = "Bad Request", body = BadRequestBody),
        (status = 502, description = "Face service failed", body = VendorErrorBody)
    )
)]
pub async fn detect_face(
    State(state): State<Arc<ServerState>>,
    BodyFields(fields): BodyFields,
) -> ServerResult<Json<NormalizedResponse>> {
    run(&state, DetectMode::FaceId, &fields).await
}

/// Detect faces and return landmark geometry (eyes, nose, mouth, brows).
#[utoipa::path(
    post,
    path = "/detectfacelandmarks",
    tag = "faces",
    request_body(content = ImageUrlBody, description = "URL of the image to scan"),
    responses(
        (status = 200, description = "Faces with `faceLandmarks`, or the no-face sentinel", body = [FaceDoc]),
        (status = 400, description = "Bad Request", body = BadRequestBody),
        (status = 502, description = "Face service failed", body = VendorErrorBody)
    )
)]
pub async fn detect_face_landmarks(
    State(state): State<Arc<ServerState>>,
    BodyFields(fields): BodyFields,
) -> ServerResult<Json<NormalizedResponse>> {
    run(&state, DetectMode::Landmarks, &fields).await
}

/// Detect faces and return age, gender and head pose.
#[utoipa::path(
    post,
    path = "/detectfaceemotions",
    tag = "faces",
    request_body(content = ImageUrlBody, description = "URL of the image to scan"),
    responses(
        (status = 200, description = "Faces with `faceAttributes`, or the no-face sentinel", body = [FaceDoc]),
        (status = 400, description = "Bad Request", body = BadRequestBody),
        (status = 502, description = "Face service failed", body = VendorErrorBody)
    )
)]
pub async fn detect_face_emotions(
    State(state): State<Arc<ServerState>>,
    BodyFields(fields): BodyFields,
) -> ServerResult<Json<NormalizedResponse>> {
    run(&state, DetectMode::Attributes, &fields).await
}

async fn run(
    state: &ServerState,
    mode: DetectMode,
    fields: &Map<String, Value>,
) -> ServerResult<Json<NormalizedResponse>> {
    let normalized = detect_faces(state.faces.as_ref(), mode, fields).await?;
    Ok(Json(normalized))
}
