//! Request and response values. All of them live for one HTTP request.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned in place of an empty detection list.
pub const NO_FACE_DETECTED: &str = "No face detected";

/// Validated input of the three detect endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDetectionRequest {
    pub image_url: String,
}

/// Validated input of the similarity endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FaceComparisonRequest {
    #[serde(rename = "imageUrl1")]
    pub image_url1: String,
    #[serde(rename = "imageUrl2")]
    pub image_url2: String,
}

/// One face as reported by the vendor.
///
/// Only `faceId` is interpreted here; rectangles, landmarks and attributes
/// are carried through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Vendor same-person judgment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub is_identical: bool,
    pub confidence: f64,
}

/// Client-facing body of every successful face operation.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedResponse {
    /// Vendor payload, verbatim.
    Payload(Value),
    /// The vendor found no face; rendered as `{"face": "No face detected"}`.
    NoFace,
}

impl NormalizedResponse {
    pub fn is_no_face(&self) -> bool {
        matches!(self, NormalizedResponse::NoFace)
    }

    pub fn into_value(self) -> Value {
        match self {
            NormalizedResponse::Payload(value) => value,
            NormalizedResponse::NoFace => {
                let mut map = Map::new();
                map.insert("face".to_string(), Value::from(NO_FACE_DETECTED));
                Value::Object(map)
            }
        }
    }
}

impl Serialize for NormalizedResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NormalizedResponse::Payload(value) => value.serialize(serializer),
            NormalizedResponse::NoFace => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("face", NO_FACE_DETECTED)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_face_serializes_to_sentinel() {
        let body = serde_json::to_value(NormalizedResponse::NoFace).unwrap();
        assert_eq!(body, json!({"face": "No face detected"}));
        assert_eq!(NormalizedResponse::NoFace.into_value(), body);
    }

    #[test]
    fn detected_face_keeps_unknown_attributes() {
        let raw = json!({
            "faceId": "f1",
            "faceRectangle": {"top": 1, "left": 2, "width": 3, "height": 4}
        });
        let face: DetectedFace = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(face.face_id.as_deref(), Some("f1"));
        assert_eq!(serde_json::to_value(&face).unwrap(), raw);
    }

    #[test]
    fn verification_result_uses_vendor_field_names() {
        let result: VerificationResult =
            serde_json::from_value(json!({"isIdentical": true, "confidence": 0.9})).unwrap();
        assert!(result.is_identical);
        assert_eq!(result.confidence, 0.9);
    }
}
