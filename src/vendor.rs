//! Outbound calls to the face service.
//!
//! [`FaceService`] is the seam the detect and compare operations run
//! against; [`AzureFaceClient`] is the production implementation speaking
//! the Azure Face v1.0 REST shape.

use crate::config::VendorConfig;
use crate::error::{ConfigError, VendorError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde_json::{json, Value};

/// Header carrying the subscription credential (`Ocp-Apim-Subscription-Key`).
pub const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// Which detection variant to request. Capability sets are mutually
/// exclusive at the vendor, so each mode selects its own model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectMode {
    /// Face ids with the higher-accuracy model.
    FaceId,
    /// Landmark geometry; no face id.
    Landmarks,
    /// Age, gender and head pose.
    Attributes,
}

impl DetectMode {
    /// Vendor query parameters for this mode.
    pub fn query(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            DetectMode::FaceId => &[("detectionModel", "detection_02"), ("returnFaceId", "true")],
            DetectMode::Landmarks => &[
                ("detectionModel", "detection_01"),
                ("returnFaceLandmarks", "true"),
            ],
            DetectMode::Attributes => &[
                ("detectionModel", "detection_01"),
                ("returnFaceAttributes", "age,gender,headPose"),
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectMode::FaceId => "face_id",
            DetectMode::Landmarks => "landmarks",
            DetectMode::Attributes => "attributes",
        }
    }
}

#[async_trait]
pub trait FaceService: Send + Sync {
    /// Detect faces in the image at `image_url`, returning the raw vendor body.
    async fn detect(&self, mode: DetectMode, image_url: &str) -> Result<Value, VendorError>;

    /// Ask whether two face ids belong to the same person.
    async fn verify(&self, face_id1: &str, face_id2: &str) -> Result<Value, VendorError>;
}

/// reqwest-backed client for the Azure Face REST API.
#[derive(Debug, Clone)]
pub struct AzureFaceClient {
    http: Client,
    detect_url: Url,
    verify_url: Url,
}

impl AzureFaceClient {
    pub fn new(cfg: &VendorConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let mut key = HeaderValue::from_str(&cfg.subscription_key)
            .map_err(|_| ConfigError::Client("subscription key is not a valid header value".into()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(SUBSCRIPTION_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(cfg.timeout())
            .connect_timeout(cfg.connect_timeout())
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            http,
            detect_url: cfg.detect_endpoint()?,
            verify_url: cfg.verify_endpoint()?,
        })
    }

    async fn post(&self, request: reqwest::RequestBuilder) -> Result<Value, VendorError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "face service unreachable");
            VendorError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(status = status.as_u16(), error = %e, "unreadable rejection body");
                    String::new()
                }
            };
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            tracing::warn!(status = status.as_u16(), body = %body, "face service rejected call");
            return Err(VendorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl FaceService for AzureFaceClient {
    async fn detect(&self, mode: DetectMode, image_url: &str) -> Result<Value, VendorError> {
        tracing::debug!(mode = mode.as_str(), image_url, "detect call");
        let request = self
            .http
            .post(self.detect_url.clone())
            .query(mode.query())
            .json(&json!({ "url": image_url }));
        self.post(request).await
    }

    async fn verify(&self, face_id1: &str, face_id2: &str) -> Result<Value, VendorError> {
        tracing::debug!(face_id1, face_id2, "verify call");
        let request = self
            .http
            .post(self.verify_url.clone())
            .json(&json!({ "faceId1": face_id1, "faceId2": face_id2 }));
        self.post(request).await
    }
}
