mod app;
mod config;
mod detect;
mod nutrition;
mod pages;
mod providers;
mod recipes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "bitebot=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init()?;
    if state.config.chat.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY not set; recipe generation will be skipped");
    }
    if state.config.nutrition.api_key.is_none() {
        tracing::warn!("NUTRITION_API_KEY not set; nutrition analysis will be skipped");
    }
    if state.config.detect.api_key.is_none() {
        tracing::warn!("ROBOFLOW_API_KEY not set; ingredient detection will be skipped");
    }

    let app = app::build_app(state);
    app::serve(app).await
}
