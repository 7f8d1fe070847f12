use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::competition::{CompetitionResponse, CreateCompetitionRequest},
    dto::discipline::AttachDisciplineRequest,
    models::{CompetitionDiscipline, CompetitionDisciplineDetail, DisciplineLevel},
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions",
    responses(
        (status = 200, description = "List all competitions successfully", body = Vec<CompetitionResponse>)
    ),
    tag = "competitions"
)]
pub async fn list_competitions(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompetitionResponse>>, WebError> {
    let competitions = services::list_competitions(state.db.pool()).await?;

    let response: Vec<CompetitionResponse> = competitions
        .into_iter()
        .map(CompetitionResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Competition found", body = CompetitionResponse),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let competition = services::get_competition(state.db.pool(), id).await?;

    Ok(Json(CompetitionResponse::from(competition)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions",
    request_body = CreateCompetitionRequest,
    responses(
        (status = 201, description = "Competition created successfully", body = CompetitionResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(state): State<AppState>,
    Json(req): Json<CreateCompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_dates()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let competition = services::create_competition(state.db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CompetitionResponse::from(competition)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/disciplines",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Active disciplines attached to the competition", body = Vec<CompetitionDisciplineDetail>),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn list_disciplines(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let disciplines = services::list_disciplines(state.db.pool(), id).await?;

    Ok(Json(disciplines).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions/{id}/disciplines",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    request_body = AttachDisciplineRequest,
    responses(
        (status = 201, description = "Discipline attached", body = CompetitionDiscipline),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Competition not found"),
        (status = 409, description = "Discipline does not exist")
    ),
    tag = "competitions"
)]
pub async fn attach_discipline(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AttachDisciplineRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let level = req
        .level
        .parse::<DisciplineLevel>()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let row = services::attach_discipline(state.db.pool(), id, req.discipline_id, level).await?;

    Ok((StatusCode::CREATED, Json(row)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/competitions/{id}/disciplines/{discipline_id}",
    params(
        ("id" = i32, Path, description = "Competition ID"),
        ("discipline_id" = i32, Path, description = "Discipline ID")
    ),
    responses(
        (status = 204, description = "Discipline detached"),
        (status = 404, description = "Competition-discipline pair not found")
    ),
    tag = "competitions"
)]
pub async fn detach_discipline(
    State(state): State<AppState>,
    Path((id, discipline_id)): Path<(i32, i32)>,
) -> Result<Response, WebError> {
    services::detach_discipline(state.db.pool(), id, discipline_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
