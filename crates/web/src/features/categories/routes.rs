use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{clear_categories, generate_categories, get_category_stats, list_categories};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:id/categories", get(list_categories))
        .route("/:id/categories", delete(clear_categories))
        .route("/:id/categories/generate", post(generate_categories))
        .route("/:id/categories/stats", get(get_category_stats))
}
