pub mod dto;
pub mod handlers;
pub mod service;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/detect", post(handlers::detect_image))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024)) // 10MB
}
