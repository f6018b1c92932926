use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use serde::Deserialize;

use super::{IngredientDetector, ProviderError};
use crate::config::DetectConfig;

/// Roboflow hosted-inference client. The detection endpoint takes the image as
/// a base64 body, not multipart.
pub struct RoboflowClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model_id: String,
}

impl RoboflowClient {
    pub fn new(client: reqwest::Client, config: &DetectConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model_id: config.model_id.clone(),
        }
    }
}

#[derive(Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
struct Prediction {
    class: String,
}

#[async_trait]
impl IngredientDetector for RoboflowClient {
    async fn detect(&self, jpeg: Bytes) -> Result<Vec<String>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey("ROBOFLOW_API_KEY"))?;

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, self.model_id))
            .query(&[("api_key", api_key)])
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(BASE64.encode(&jpeg))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".into());
            return Err(ProviderError::Api { status, body });
        }

        let parsed: InferenceResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(parsed.predictions.into_iter().map(|p| p.class).collect())
    }
}
