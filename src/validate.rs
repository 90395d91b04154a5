//! Presence checks on parsed request bodies.
//!
//! A field counts as present only when it is a non-empty JSON string.
//! Validation always runs before the first vendor call.

use crate::error::FaceError;
use crate::model::{FaceComparisonRequest, FaceDetectionRequest};
use serde_json::{Map, Value};

pub const IMAGE_URL: &str = "imageUrl";
pub const IMAGE_URL_1: &str = "imageUrl1";
pub const IMAGE_URL_2: &str = "imageUrl2";

pub fn validate_detection(fields: &Map<String, Value>) -> Result<FaceDetectionRequest, FaceError> {
    Ok(FaceDetectionRequest {
        image_url: required(fields, IMAGE_URL)?,
    })
}

pub fn validate_comparison(
    fields: &Map<String, Value>,
) -> Result<FaceComparisonRequest, FaceError> {
    Ok(FaceComparisonRequest {
        image_url1: required(fields, IMAGE_URL_1)?,
        image_url2: required(fields, IMAGE_URL_2)?,
    })
}

fn required(fields: &Map<String, Value>, field: &'static str) -> Result<String, FaceError> {
    match fields.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        _ => Err(FaceError::InvalidRequest { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn accepts_image_url() {
        let req = validate_detection(&fields(json!({"imageUrl": "http://x/a.jpg"}))).unwrap();
        assert_eq!(req.image_url, "http://x/a.jpg");
    }

    #[test]
    fn rejects_missing_empty_and_non_string() {
        for body in [
            json!({}),
            json!({"imageUrl": ""}),
            json!({"imageUrl": null}),
            json!({"imageUrl": 7}),
            json!({"imageurl": "http://x/a.jpg"}),
        ] {
            let err = validate_detection(&fields(body)).unwrap_err();
            assert!(matches!(err, FaceError::InvalidRequest { field: IMAGE_URL }));
        }
    }

    #[test]
    fn comparison_requires_both_urls() {
        let ok = validate_comparison(&fields(json!({"imageUrl1": "u1", "imageUrl2": "u2"})))
            .unwrap();
        assert_eq!(ok.image_url1, "u1");
        assert_eq!(ok.image_url2, "u2");

        let err = validate_comparison(&fields(json!({"imageUrl1": "u1"}))).unwrap_err();
        assert!(matches!(err, FaceError::InvalidRequest { field: IMAGE_URL_2 }));

        let err = validate_comparison(&fields(json!({"imageUrl2": "u2"}))).unwrap_err();
        assert!(matches!(err, FaceError::InvalidRequest { field: IMAGE_URL_1 }));
    }
}
