//! Core of the facegate face detection proxy.
//!
//! Validates inbound image URLs, calls the face service through the
//! [`FaceService`] seam and maps the vendor payload to the client-facing
//! shape. The HTTP surface lives in the `facegate-server` crate.
//!
//! ```rust,no_run
//! use facegate::{detect_faces, AzureFaceClient, DetectMode, VendorConfig};
//! use serde_json::{json, Map, Value};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = VendorConfig::new("https://example.cognitiveservices.azure.com/face/v1.0", "key");
//! let client = AzureFaceClient::new(&cfg)?;
//! let mut body = Map::new();
//! body.insert("imageUrl".into(), Value::from("https://example.com/a.jpg"));
//! let faces = detect_faces(&client, DetectMode::FaceId, &body).await?;
//! println!("{}", json!(faces));
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod config;
pub mod detect;
pub mod error;
pub mod model;
pub mod normalize;
pub mod validate;
pub mod vendor;

pub use compare::find_similar;
pub use config::VendorConfig;
pub use detect::detect_faces;
pub use error::{ConfigError, FaceError, Stage, VendorError};
pub use model::{
    DetectedFace, FaceComparisonRequest, FaceDetectionRequest, NO_FACE_DETECTED,
    NormalizedResponse, VerificationResult,
};
pub use normalize::normalize;
pub use validate::{validate_comparison, validate_detection};
pub use vendor::{AzureFaceClient, DetectMode, FaceService};
