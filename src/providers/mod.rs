//! The network boundary: one narrow trait per hosted API, one reqwest-backed
//! client per trait. Handlers never talk to the network directly, so tests can
//! substitute deterministic fakes.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::nutrition::dto::NutritionRecord;

mod api_ninjas;
mod groq;
mod roboflow;

pub use api_ninjas::ApiNinjasClient;
pub use groq::GroqClient;
pub use roboflow::RoboflowClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} is not configured")]
    MissingApiKey(&'static str),
    #[error("request failed: {0}")]
    Request(String),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected response shape: {0}")]
    Decode(String),
    #[error("image error: {0}")]
    Image(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.to_string())
    }
}

/// Chat-completion boundary. One call, one completion; variant handling is
/// the caller's business.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

/// Nutrition boundary: one query string in, every match for it out.
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Vec<NutritionRecord>, ProviderError>;
}

/// Vision boundary: a normalized JPEG in, raw prediction labels out
/// (duplicates included; de-duplication happens in the detect service).
#[async_trait]
pub trait IngredientDetector: Send + Sync {
    async fn detect(&self, jpeg: Bytes) -> Result<Vec<String>, ProviderError>;
}
