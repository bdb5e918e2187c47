use crate::api::app_state::AppState;
use crate::api::handlers::help_handler::*;
use axum::{Router, routing::post};

pub fn create_help_router() -> Router<AppState> {
    Router::new().route("/help-requests", post(submit_help_request))
}
