use crate::model::NormalizedResponse;
use serde_json::Value;

/// Map a successful vendor payload to the client-facing shape.
///
/// An empty array becomes the "no face" sentinel; every other payload,
/// verification objects included, is returned unchanged.
pub fn normalize(payload: Value) -> NormalizedResponse {
    match &payload {
        Value::Array(faces) if faces.is_empty() => NormalizedResponse::NoFace,
        _ => NormalizedResponse::Payload(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_list_becomes_sentinel() {
        let normalized = normalize(json!([]));
        assert!(normalized.is_no_face());
        assert_eq!(
            serde_json::to_value(normalized).unwrap(),
            json!({"face": "No face detected"})
        );
    }

    #[test]
    fn faces_pass_through() {
        let faces = json!([
            {"faceId": "f1", "faceRectangle": {"top": 10, "left": 20, "width": 30, "height": 30}},
            {"faceId": "f2"}
        ]);
        assert_eq!(normalize(faces.clone()), NormalizedResponse::Payload(faces));
    }

    #[test]
    fn objects_pass_through_regardless_of_content() {
        for payload in [
            json!({"isIdentical": false, "confidence": 0.1}),
            json!({}),
            json!(null),
        ] {
            assert_eq!(normalize(payload.clone()), NormalizedResponse::Payload(payload));
        }
    }
}
