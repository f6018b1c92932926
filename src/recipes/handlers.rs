use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use super::dto::{GenerateRecipeRequest, GenerateRecipeResponse};
use super::service::{build_prompt, generate_variants, MAX_VARIANTS};
use crate::nutrition::service::lookup_nutrition;
use crate::state::AppState;

/// POST /recipes
///
/// Validates, generates one completion per requested variant, then looks up
/// nutrition for the same raw ingredient text. Upstream failures degrade into
/// warnings; only input validation produces a non-200.
#[instrument(skip(state, body))]
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(body): Json<GenerateRecipeRequest>,
) -> Result<Json<GenerateRecipeResponse>, (StatusCode, String)> {
    if body.ingredients.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please enter your ingredients.".into(),
        ));
    }
    if body.equipment.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please enter your equipment.".into(),
        ));
    }

    let count = body
        .variants
        .unwrap_or(state.config.default_variants)
        .clamp(1, MAX_VARIANTS);

    let prompt = build_prompt(&body);
    let (recipes, mut warnings) = generate_variants(state.recipes.as_ref(), &prompt, count).await;

    let (nutrition, nutrition_warnings) =
        lookup_nutrition(state.nutrition.as_ref(), &body.ingredients).await;
    warnings.extend(nutrition_warnings);

    Ok(Json(GenerateRecipeResponse {
        recipes,
        nutrition,
        warnings,
    }))
}
