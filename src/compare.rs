//! Face similarity: two detections feeding one verification.
//!
//! Steps run strictly in order Validate → DetectFirst → DetectSecond →
//! Verify. The first failing step ends the flow and is named in the error;
//! nothing after it is called. An image with no detected face also ends the
//! flow, with the "no face" response.

use crate::error::{FaceError, Stage, VendorError};
use crate::model::{DetectedFace, NormalizedResponse, VerificationResult};
use crate::normalize::normalize;
use crate::validate::validate_comparison;
use crate::vendor::{DetectMode, FaceService};
use serde_json::{Map, Value};

pub async fn find_similar(
    service: &dyn FaceService,
    fields: &Map<String, Value>,
) -> Result<NormalizedResponse, FaceError> {
    let request = validate_comparison(fields)?;

    let Some(first) = detect_face_id(service, &request.image_url1, Stage::DetectFirst).await?
    else {
        return Ok(NormalizedResponse::NoFace);
    };

    let Some(second) = detect_face_id(service, &request.image_url2, Stage::DetectSecond).await?
    else {
        return Ok(NormalizedResponse::NoFace);
    };

    let payload = service
        .verify(&first, &second)
        .await
        .map_err(FaceError::vendor(Stage::Verify))?;

    // Logged only; the payload is relayed whatever its shape.
    match serde_json::from_value::<VerificationResult>(payload.clone()) {
        Ok(result) => tracing::info!(
            face_id1 = %first,
            face_id2 = %second,
            is_identical = result.is_identical,
            confidence = result.confidence,
            "verification finished"
        ),
        Err(e) => tracing::warn!(error = %e, "verification payload has unexpected shape"),
    }

    Ok(normalize(payload))
}

/// Face id of the first face found at `image_url`, or `None` when the vendor
/// reports no faces.
async fn detect_face_id(
    service: &dyn FaceService,
    image_url: &str,
    stage: Stage,
) -> Result<Option<String>, FaceError> {
    let payload = service
        .detect(DetectMode::FaceId, image_url)
        .await
        .map_err(FaceError::vendor(stage))?;

    let faces: Vec<DetectedFace> = serde_json::from_value(payload)
        .map_err(|e| FaceError::vendor(stage)(VendorError::Decode(e.to_string())))?;

    let Some(face) = faces.into_iter().next() else {
        tracing::info!(%stage, image_url, "no face detected, skipping remaining steps");
        return Ok(None);
    };

    match face.face_id {
        Some(id) if !id.is_empty() => {
            tracing::debug!(%stage, face_id = %id, "face id extracted");
            Ok(Some(id))
        }
        _ => Err(FaceError::vendor(stage)(VendorError::Decode(
            "detected face carries no faceId".to_string(),
        ))),
    }
}
