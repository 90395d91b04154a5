use crate::error::{FaceError, Stage};
use crate::model::NormalizedResponse;
use crate::normalize::normalize;
use crate::validate::validate_detection;
use crate::vendor::{DetectMode, FaceService};
use serde_json::{Map, Value};

/// Validate `fields`, run one detection call and normalize the result.
pub async fn detect_faces(
    service: &dyn FaceService,
    mode: DetectMode,
    fields: &Map<String, Value>,
) -> Result<NormalizedResponse, FaceError> {
    let request = validate_detection(fields)?;

    let payload = service
        .detect(mode, &request.image_url)
        .await
        .map_err(FaceError::vendor(Stage::Detect))?;

    let normalized = normalize(payload);
    tracing::info!(
        mode = mode.as_str(),
        image_url = %request.image_url,
        no_face = normalized.is_no_face(),
        "detection finished"
    );
    Ok(normalized)
}
