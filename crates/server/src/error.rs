use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use facegate::{FaceError, Stage, VendorError};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Fixed message of every 400 response.
pub const BAD_REQUEST_MESSAGE: &str = "Bad Request";

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Missing or unparsable input. Rendered as `{"message": "Bad Request"}`.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Face service error during {stage}: {source}")]
    Vendor {
        stage: Stage,
        #[source]
        source: VendorError,
    },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The inbound request deadline passed before a response was ready.
    #[error("Request timed out")]
    Timeout,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Vendor { .. } => StatusCode::BAD_GATEWAY,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Vendor { .. } => "VENDOR_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
            ServerError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ServerError::Timeout => "TIMEOUT",
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServerError::Vendor { stage, source } => {
                let mut details = json!({ "stage": stage });
                if let Some(status) = source.vendor_status() {
                    details["vendor_status"] = json!(status);
                }
                if let Some(body) = source.vendor_body() {
                    details["vendor_body"] = body.clone();
                }
                Some(details)
            }
            _ => None,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ServerError::BadRequest(reason) = &self {
            tracing::info!(reason = %reason, "rejected request");
            return (status, Json(json!({ "message": BAD_REQUEST_MESSAGE }))).into_response();
        }

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<FaceError> for ServerError {
    fn from(err: FaceError) -> Self {
        match err {
            FaceError::InvalidRequest { field } => {
                ServerError::BadRequest(format!("missing required field '{field}'"))
            }
            FaceError::Vendor { stage, source } => ServerError::Vendor { stage, source },
        }
    }
}
