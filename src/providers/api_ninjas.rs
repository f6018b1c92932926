use async_trait::async_trait;

use super::{NutritionProvider, ProviderError};
use crate::config::NutritionConfig;
use crate::nutrition::dto::NutritionRecord;

/// API Ninjas nutrition client: one GET per ingredient query, static header key.
pub struct ApiNinjasClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl ApiNinjasClient {
    pub fn new(client: reqwest::Client, config: &NutritionConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl NutritionProvider for ApiNinjasClient {
    async fn lookup(&self, query: &str) -> Result<Vec<NutritionRecord>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey("NUTRITION_API_KEY"))?;

        let response = self
            .client
            .get(&self.base_url)
            .header("X-Api-Key", api_key)
            .query(&[("query", query)])
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

        response
            .json::<Vec<NutritionRecord>>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
