use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    dto::discipline::{
        BackfillShapesResponse, ProvisionBeltCategoriesRequest, ProvisionBeltCategoriesResponse,
    },
    models::{Discipline, DisciplineLevel},
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/disciplines",
    responses(
        (status = 200, description = "List all disciplines successfully", body = Vec<Discipline>)
    ),
    tag = "disciplines"
)]
pub async fn list_disciplines(
    State(state): State<AppState>,
) -> Result<Json<Vec<Discipline>>, WebError> {
    let disciplines = services::list_disciplines(state.db.pool()).await?;

    Ok(Json(disciplines))
}

#[utoipa::path(
    post,
    path = "/api/disciplines/backfill-shapes",
    responses(
        (status = 200, description = "Category shapes inferred and stored for unclassified disciplines", body = BackfillShapesResponse)
    ),
    tag = "disciplines"
)]
pub async fn backfill_shapes(State(state): State<AppState>) -> Result<Response, WebError> {
    let response = services::backfill_shapes(state.db.pool()).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/disciplines/{id}/belt-categories",
    params(
        ("id" = i32, Path, description = "Discipline ID")
    ),
    request_body = ProvisionBeltCategoriesRequest,
    responses(
        (status = 200, description = "Belt categories provisioned", body = ProvisionBeltCategoriesResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Discipline not found")
    ),
    tag = "disciplines"
)]
pub async fn provision_belt_categories(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ProvisionBeltCategoriesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let level = req
        .level
        .parse::<DisciplineLevel>()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let response =
        services::provision_belt_categories(state.db.pool(), &state.regulations, id, level)
            .await?;

    Ok(Json(response).into_response())
}
