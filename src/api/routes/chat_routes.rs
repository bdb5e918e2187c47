use crate::api::app_state::AppState;
use crate::api::handlers::chat_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

pub fn create_chat_router() -> Router<AppState> {
    Router::new()
        .route("/chat/message", post(send_message))
        .route("/chat/history", get(chat_history))
}
