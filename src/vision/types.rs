use serde::{Deserialize, Serialize};

/// One label returned by the image-understanding service, in service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub description: String,
    pub confidence: f32,
}

// Wire types for the Cloud Vision images:annotate endpoint

#[derive(Debug, Serialize)]
pub struct AnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct ImageContent {
    /// Base64-encoded image bytes.
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
}

#[derive(Debug, Deserialize)]
pub struct AnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
pub struct AnnotateImageResponse {
    #[serde(rename = "labelAnnotations", default)]
    pub label_annotations: Vec<LabelAnnotation>,
    pub error: Option<AnnotateError>,
}

#[derive(Debug, Deserialize)]
pub struct LabelAnnotation {
    pub description: String,
    #[serde(default)]
    pub score: f32,
}

#[derive(Debug, Deserialize)]
pub struct AnnotateError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_annotate_request_serialization() {
        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: "aGVsbG8=".to_string(),
                },
                features: vec![Feature {
                    feature_type: "LABEL_DETECTION".to_string(),
                    max_results: 10,
                }],
            }],
        };

        let serialized = serde_json::to_value(&request).unwrap();
        assert_eq!(
            serialized["requests"][0]["image"]["content"],
            json!("aGVsbG8=")
        );
        assert_eq!(
            serialized["requests"][0]["features"][0]["type"],
            json!("LABEL_DETECTION")
        );
        assert_eq!(
            serialized["requests"][0]["features"][0]["maxResults"],
            json!(10)
        );
    }

    #[test]
    fn test_annotate_response_deserialization() {
        let body = json!({
            "responses": [{
                "labelAnnotations": [
                    {"description": "Food", "score": 0.97},
                    {"description": "Tableware", "score": 0.88}
                ]
            }]
        });

        let response: AnnotateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.responses.len(), 1);
        let annotations = &response.responses[0].label_annotations;
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].description, "Food");
        assert!(response.responses[0].error.is_none());
    }

    #[test]
    fn test_annotate_response_with_embedded_error() {
        let body = json!({
            "responses": [{
                "error": {"message": "Bad image data", "code": 3}
            }]
        });

        let response: AnnotateResponse = serde_json::from_value(body).unwrap();
        let error = response.responses[0].error.as_ref().unwrap();
        assert_eq!(error.message, "Bad image data");
        assert!(response.responses[0].label_annotations.is_empty());
    }
}
