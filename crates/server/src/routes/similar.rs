use super::docs::{BadRequestBody, ImageUrlPairBody, VendorErrorBody, VerificationDoc};
use crate::error::ServerResult;
use crate::extract::BodyFields;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use facegate::NormalizedResponse;
use std::sync::Arc;

/// Decide whether the first face of each image belongs to the same person.
///
/// Runs detect on `imageUrl1`, detect on `imageUrl2`, then verify, stopping
/// at the first failure. If either image has no face the no-face sentinel is
/// returned and verify is skipped.
#[utoipa::path(
    post,
    path = "/findsimilar",
    tag = "faces",
    request_body(content = ImageUrlPairBody, description = "URLs of the two images to compare"),
    responses(
        (status = 200, description = "Verification result, or the no-face sentinel when an image has no face", body = VerificationDoc),
        (status = 400, description = "Bad Request", body = BadRequestBody),
        (status = 502, description = "A face service step failed; `details.stage` names it", body = VendorErrorBody)
    )
)]
pub async fn find_similar(
    State(state): State<Arc<ServerState>>,
    BodyFields(fields): BodyFields,
) -> ServerResult<Json<NormalizedResponse>> {
    let normalized = facegate::find_similar(state.faces.as_ref(), &fields).await?;
    Ok(Json(normalized))
}
