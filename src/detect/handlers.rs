use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::{error, instrument};

use super::dto::DetectResponse;
use super::service::detect_ingredients;
use crate::state::AppState;

/// POST /detect (multipart, field `image`)
///
/// Detection failures are not errors to the form: the response degrades to an
/// empty set with the message attached. Only a missing field is a 4xx.
#[instrument(skip(state, mp))]
pub async fn detect_image(
    State(state): State<AppState>,
    mut mp: Multipart,
) -> Result<Json<DetectResponse>, (StatusCode, String)> {
    let mut data: Option<Bytes> = None;
    while let Ok(Some(field)) = mp.next_field().await {
        if field.name() == Some("image") {
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
            );
        }
    }
    let Some(data) = data else {
        return Err((StatusCode::BAD_REQUEST, "image field is required".into()));
    };

    match detect_ingredients(state.detector.as_ref(), &data).await {
        Ok(ingredients) => Ok(Json(DetectResponse {
            ingredients,
            error: None,
        })),
        Err(e) => {
            error!(error = %e, "ingredient detection failed");
            Ok(Json(DetectResponse {
                ingredients: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}
