
use serde::{Serialize, Deserialize};

pub const EVALUATE_ENDPOINT: &str = "evaluate";
pub const DEFAULT_MIME_TYPE: &str = "image/png";

// body of POST /evaluate
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub image: EvaluationImage,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvaluationImage {
    pub name: String,
    pub base64: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

impl EvaluationRequest {
    pub fn new(name: impl Into<String>, base64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let image = EvaluationImage {
            name: name.into(),
            base64: base64.into(),
            mime_type: mime_type.into(),
        };
        Self { image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case_mime_type() {
        let request = EvaluationRequest::new("cat.png", "iVBORw==", "image/png");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({
            "image": {
                "name": "cat.png",
                "base64": "iVBORw==",
                "mimeType": "image/png",
            }
        }));
    }
}
