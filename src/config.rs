#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct NutritionConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct DetectConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model_id: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub chat: ChatConfig,
    pub nutrition: NutritionConfig,
    pub detect: DetectConfig,
    pub default_variants: usize,
}

impl AppConfig {
    /// Resolved once at startup and passed to each provider at construction.
    /// Precedence: process environment, then `.env` (loaded in `main`), then
    /// the defaults below. API keys have no defaults; a missing key is
    /// surfaced per request, never a startup failure.
    pub fn from_env() -> anyhow::Result<Self> {
        let chat = ChatConfig {
            api_key: std::env::var("GROQ_API_KEY").ok(),
            base_url: std::env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".into()),
            model: std::env::var("GROQ_MODEL").unwrap_or_else(|_| "llama3-70b-8192".into()),
            max_tokens: std::env::var("GROQ_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(700),
            temperature: std::env::var("GROQ_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .unwrap_or(0.7),
        };
        let nutrition = NutritionConfig {
            api_key: std::env::var("NUTRITION_API_KEY").ok(),
            base_url: std::env::var("NUTRITION_BASE_URL")
                .unwrap_or_else(|_| "https://api.api-ninjas.com/v1/nutrition".into()),
        };
        let detect = DetectConfig {
            api_key: std::env::var("ROBOFLOW_API_KEY").ok(),
            base_url: std::env::var("ROBOFLOW_BASE_URL")
                .unwrap_or_else(|_| "https://detect.roboflow.com".into()),
            model_id: std::env::var("ROBOFLOW_MODEL_ID")
                .unwrap_or_else(|_| "ingredient-detection-5uzov/5".into()),
        };
        let default_variants = std::env::var("RECIPE_VARIANTS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1);

        Ok(Self {
            chat,
            nutrition,
            detect,
            default_variants,
        })
    }
}
