pub mod dto;
pub mod handlers;
pub mod service;

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/recipes", post(handlers::generate_recipe))
}
