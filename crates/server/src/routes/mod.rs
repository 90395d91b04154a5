//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Liveness check
//! - `detect`: Face, landmark and attribute detection
//! - `similar`: Two-image face comparison
//! - `docs`: OpenAPI document

pub mod detect;
pub mod docs;
pub mod health;
pub mod similar;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Service version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "facegate",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "facegate",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/detectface",
            "/detectfacelandmarks",
            "/detectfaceemotions",
            "/findsimilar",
            "/docs",
            "/health"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

/// 405 handler for known routes called with the wrong method
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
