//! Request body extraction.
//!
//! The face endpoints accept JSON or URL-encoded form bodies. Either way the
//! handler sees a flat field map; anything that cannot be read as one is a
//! bad request.

use crate::error::ServerError;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Parsed body fields of a face request.
#[derive(Debug, Default)]
pub struct BodyFields(pub Map<String, Value>);

impl<S> FromRequest<S> for BodyFields
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| rejected(e.status(), e.body_text()))?;
            return Ok(Self(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect(),
            ));
        }

        if content_type.starts_with("application/json") {
            let Json(fields) = Json::<Map<String, Value>>::from_request(req, state)
                .await
                .map_err(|e| rejected(e.status(), e.body_text()))?;
            return Ok(Self(fields));
        }

        // No usable body: validation reports the missing fields.
        Ok(Self::default())
    }
}

// Oversized bodies still answer with the fixed 400, but are logged apart
// from malformed ones.
fn rejected(status: StatusCode, reason: String) -> ServerError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(reason = %reason, "request body exceeds size limit");
        return ServerError::BadRequest(format!("body too large: {reason}"));
    }
    ServerError::BadRequest(reason)
}
