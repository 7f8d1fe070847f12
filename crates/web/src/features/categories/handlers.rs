use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::category::{CategoryStats, ClearCategoriesResponse, GenerationReport};
use storage::models::CompetitionCategory;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/competitions/{id}/categories/generate",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Categories generated; the report carries created/updated counts and the number of belt rules skipped for missing reference data", body = GenerationReport),
        (status = 404, description = "Competition not found")
    ),
    tag = "categories"
)]
pub async fn generate_categories(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let report = services::generate_categories(state.db.pool(), &state.regulations, id).await?;

    Ok(Json(report).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/competitions/{id}/categories",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Categories cleared", body = ClearCategoriesResponse),
        (status = 404, description = "Competition not found")
    ),
    tag = "categories"
)]
pub async fn clear_categories(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let response = services::clear_categories(state.db.pool(), id).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/categories",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Generated categories for the competition", body = Vec<CompetitionCategory>),
        (status = 404, description = "Competition not found")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let categories = services::list_categories(state.db.pool(), id).await?;

    Ok(Json(categories).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/categories/stats",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Category counts by discipline and gender", body = CategoryStats),
        (status = 404, description = "Competition not found")
    ),
    tag = "categories"
)]
pub async fn get_category_stats(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let stats = services::get_category_stats(state.db.pool(), id).await?;

    Ok(Json(stats).into_response())
}
