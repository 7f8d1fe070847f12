use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{backfill_shapes, list_disciplines, provision_belt_categories};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_disciplines))
        .route("/backfill-shapes", post(backfill_shapes))
        .route("/:id/belt-categories", post(provision_belt_categories))
}
