use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Outbound step that produced a vendor failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Single detection call behind the detect endpoints.
    Detect,
    /// Detection of the first image in a comparison.
    DetectFirst,
    /// Detection of the second image in a comparison.
    DetectSecond,
    /// Same-person verification of the two extracted face ids.
    Verify,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Detect => "detect",
            Stage::DetectFirst => "detect_first",
            Stage::DetectSecond => "detect_second",
            Stage::Verify => "verify",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single call to the face service.
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("vendor responded with status {status}")]
    Status { status: u16, body: Value },

    #[error("unexpected vendor payload: {0}")]
    Decode(String),
}

impl VendorError {
    /// HTTP status returned by the vendor, when it answered at all.
    pub fn vendor_status(&self) -> Option<u16> {
        match self {
            VendorError::Status { status, .. } => Some(*status),
            VendorError::Transport(_) | VendorError::Decode(_) => None,
        }
    }

    /// Raw vendor body kept for diagnostics.
    pub fn vendor_body(&self) -> Option<&Value> {
        match self {
            VendorError::Status { body, .. } => Some(body),
            VendorError::Transport(_) | VendorError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for VendorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            VendorError::Decode(err.to_string())
        } else {
            VendorError::Transport(err.to_string())
        }
    }
}

/// Errors surfaced by the detect and compare operations.
#[derive(Debug, Error)]
pub enum FaceError {
    /// A required URL field was absent or empty. Raised before any vendor call.
    #[error("Bad Request")]
    InvalidRequest { field: &'static str },

    /// A vendor call failed; later steps were not attempted.
    #[error("{stage} step failed: {source}")]
    Vendor {
        stage: Stage,
        #[source]
        source: VendorError,
    },
}

impl FaceError {
    pub(crate) fn vendor(stage: Stage) -> impl FnOnce(VendorError) -> FaceError {
        move |source| FaceError::Vendor { stage, source }
    }
}

/// Invalid vendor configuration detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("failed to build http client: {0}")]
    Client(String),
}
