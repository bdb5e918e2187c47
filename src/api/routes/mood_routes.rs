use crate::api::app_state::AppState;
use crate::api::handlers::mood_handler::*;
use axum::{Router, routing::get};

pub fn create_mood_router() -> Router<AppState> {
    Router::new().route("/mood-checkins", get(list_checkins).post(create_checkin))
}
