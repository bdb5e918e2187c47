use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::voice_dto::*},
    error::AppError,
};

pub async fn voice_command(
    State(state): State<AppState>,
    payload: Result<Json<VoiceCommandRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    debug!(chars = request.command.chars().count(), "Voice command received");

    let reply = state.responder.respond(&request.command).await?;
    Ok(Json(reply))
}

pub async fn mood_response(
    State(state): State<AppState>,
    payload: Result<Json<MoodTextRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    debug!(language = ?request.language, "Mood text received");

    let reply = state
        .responder
        .respond_to_mood(&request.mood_text, request.language)
        .await?;
    Ok(Json(reply))
}
