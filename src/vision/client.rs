use super::types::*;
use crate::{Error, Result, config::VisionConfig};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose};
use tracing::debug;

const LABEL_DETECTION_MAX_RESULTS: u32 = 10;

#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Returns the service's labels for the image, in service order.
    async fn label_image(&self, image: &[u8]) -> Result<Vec<Label>>;
}

pub struct GoogleVisionClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoogleVisionClient {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl VisionClient for GoogleVisionClient {
    async fn label_image(&self, image: &[u8]) -> Result<Vec<Label>> {
        debug!("Requesting label detection for {} image bytes", image.len());

        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: general_purpose::STANDARD.encode(image),
                },
                features: vec![Feature {
                    feature_type: "LABEL_DETECTION".to_string(),
                    max_results: LABEL_DETECTION_MAX_RESULTS,
                }],
            }],
        };

        let url = format!("{}/v1/images:annotate?key={}", self.base_url, self.api_key);
        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::vision(format!(
                "Vision API error ({}): {}",
                status, body
            )));
        }

        let annotate: AnnotateResponse = response.json().await?;
        let image_response = annotate
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| Error::vision("Vision API returned no responses"))?;

        if let Some(error) = image_response.error {
            return Err(Error::vision(error.message));
        }

        debug!(
            "Vision API returned {} labels",
            image_response.label_annotations.len()
        );

        Ok(image_response
            .label_annotations
            .into_iter()
            .map(|annotation| Label {
                description: annotation.description,
                confidence: annotation.score,
            })
            .collect())
    }
}
