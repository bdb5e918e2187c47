use axum::{
    Form, Json,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
};

pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Form<ChatMessageForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = payload?;
    debug!(chars = form.message.chars().count(), "Chat message received");

    let reply = state.responder.chat(&form.message).await?;
    Ok((StatusCode::CREATED, Json(reply)))
}

pub async fn chat_history(
    State(state): State<AppState>,
    params: Result<Query<ChatHistoryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let limit = params
        .limit
        .unwrap_or(state.history_limit)
        .min(MAX_HISTORY_LIMIT);
    debug!(limit, "Listing chat history");

    let exchanges = state.chat_history.recent(limit).await?;
    let total = state.chat_history.count().await?;

    Ok(Json(ChatHistoryResponse { exchanges, total }))
}
