//! HTTP routes

mod adventure_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(adventure_routes::index))
        .route("/api/choices", get(adventure_routes::list_choices))
        .route("/api/adventure", post(adventure_routes::play_turn))
}
