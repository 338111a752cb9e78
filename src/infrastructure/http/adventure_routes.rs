//! Adventure API routes - Play a turn and serve the game page

use axum::{extract::State, http::StatusCode, response::Html, Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{AdventureRequestDto, AdventureResponseDto, ChoicesResponseDto};
use crate::domain::value_objects::PlayerChoice;
use crate::infrastructure::state::AppState;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serve the game page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// List the choices offered to the player
pub async fn list_choices() -> Json<ChoicesResponseDto> {
    Json(ChoicesResponseDto::default())
}

/// Play one turn for the chosen path
pub async fn play_turn(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdventureRequestDto>,
) -> Result<Json<AdventureResponseDto>, (StatusCode, String)> {
    let choice = req
        .choice
        .parse::<PlayerChoice>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let run_id = Uuid::new_v4();
    let turn = state
        .adventure_service
        .play_turn(run_id, choice.as_str())
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(AdventureResponseDto::new(run_id, turn)))
}
