use axum::{Json, extract::State};
use storage::models::AgeCategory;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/age-categories",
    responses(
        (status = 200, description = "List active age categories successfully", body = Vec<AgeCategory>)
    ),
    tag = "age-categories"
)]
pub async fn list_age_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<AgeCategory>>, WebError> {
    let categories = services::list_age_categories(state.db.pool()).await?;

    Ok(Json(categories))
}
