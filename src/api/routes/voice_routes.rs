use crate::api::app_state::AppState;
use crate::api::handlers::voice_handler::*;
use axum::{Router, routing::post};

pub fn create_voice_router() -> Router<AppState> {
    Router::new()
        .route("/voice/command", post(voice_command))
        .route("/voice/mood-response", post(mood_response))
}
