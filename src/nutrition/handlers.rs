use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use super::dto::{NutritionLookupResponse, NutritionQuery};
use super::service::lookup_nutrition;
use crate::state::AppState;

/// GET /nutrition?ingredients=egg,tomato
#[instrument(skip(state))]
pub async fn get_nutrition(
    State(state): State<AppState>,
    Query(q): Query<NutritionQuery>,
) -> Result<Json<NutritionLookupResponse>, (StatusCode, String)> {
    if q.ingredients.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "ingredients must not be empty".into(),
        ));
    }

    let (report, warnings) = lookup_nutrition(state.nutrition.as_ref(), &q.ingredients).await;
    Ok(Json(NutritionLookupResponse { report, warnings }))
}
