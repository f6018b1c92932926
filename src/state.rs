use std::sync::Arc;

use crate::config::AppConfig;
use crate::providers::{
    ApiNinjasClient, GroqClient, IngredientDetector, NutritionProvider, RecipeProvider,
    RoboflowClient,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub recipes: Arc<dyn RecipeProvider>,
    pub nutrition: Arc<dyn NutritionProvider>,
    pub detector: Arc<dyn IngredientDetector>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        // One shared HTTP client; each provider holds a cheap clone.
        let http = reqwest::Client::new();

        let recipes =
            Arc::new(GroqClient::new(http.clone(), &config.chat)) as Arc<dyn RecipeProvider>;
        let nutrition = Arc::new(ApiNinjasClient::new(http.clone(), &config.nutrition))
            as Arc<dyn NutritionProvider>;
        let detector =
            Arc::new(RoboflowClient::new(http, &config.detect)) as Arc<dyn IngredientDetector>;

        Ok(Self {
            config,
            recipes,
            nutrition,
            detector,
        })
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        recipes: Arc<dyn RecipeProvider>,
        nutrition: Arc<dyn NutritionProvider>,
        detector: Arc<dyn IngredientDetector>,
    ) -> Self {
        Self {
            config,
            recipes,
            nutrition,
            detector,
        }
    }

    pub fn fake() -> Self {
        use async_trait::async_trait;
        use bytes::Bytes;

        use crate::nutrition::dto::NutritionRecord;
        use crate::providers::ProviderError;

        struct FakeRecipes;
        #[async_trait]
        impl RecipeProvider for FakeRecipes {
            async fn complete(&self, _system: &str, user: &str) -> Result<String, ProviderError> {
                Ok(format!("Test Recipe\n\n{user}"))
            }
        }

        struct FakeNutrition;
        #[async_trait]
        impl NutritionProvider for FakeNutrition {
            async fn lookup(&self, query: &str) -> Result<Vec<NutritionRecord>, ProviderError> {
                Ok(vec![NutritionRecord {
                    name: query.to_string(),
                    calories: Some(100.0),
                    protein_g: Some(10.0),
                    fat_total_g: Some(5.0),
                    carbohydrates_total_g: Some(20.0),
                    sugar_g: Some(1.0),
                    fiber_g: Some(2.0),
                }])
            }
        }

        struct FakeDetector;
        #[async_trait]
        impl IngredientDetector for FakeDetector {
            async fn detect(&self, _jpeg: Bytes) -> Result<Vec<String>, ProviderError> {
                Ok(vec!["egg".into(), "tomato".into()])
            }
        }

        Self {
            config: Arc::new(Self::fake_config()),
            recipes: Arc::new(FakeRecipes),
            nutrition: Arc::new(FakeNutrition),
            detector: Arc::new(FakeDetector),
        }
    }

    pub fn fake_config() -> AppConfig {
        use crate::config::{ChatConfig, DetectConfig, NutritionConfig};

        AppConfig {
            chat: ChatConfig {
                api_key: Some("test".into()),
                base_url: "http://chat.fake.local".into(),
                model: "test-model".into(),
                max_tokens: 700,
                temperature: 0.7,
            },
            nutrition: NutritionConfig {
                api_key: Some("test".into()),
                base_url: "http://nutrition.fake.local".into(),
            },
            detect: DetectConfig {
                api_key: Some("test".into()),
                base_url: "http://detect.fake.local".into(),
                model_id: "test/1".into(),
            },
            default_variants: 1,
        }
    }
}
