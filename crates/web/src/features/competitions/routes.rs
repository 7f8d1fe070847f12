use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{
    attach_discipline, create_competition, detach_discipline, get_competition, list_competitions,
    list_disciplines,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_competitions))
        .route("/", post(create_competition))
        .route("/:id", get(get_competition))
        .route("/:id/disciplines", get(list_disciplines))
        .route("/:id/disciplines", post(attach_discipline))
        .route("/:id/disciplines/:discipline_id", delete(detach_discipline))
}
