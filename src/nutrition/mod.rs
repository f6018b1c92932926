pub mod dto;
pub mod handlers;
pub mod service;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/nutrition", get(handlers::get_nutrition))
}
