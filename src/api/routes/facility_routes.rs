use crate::api::app_state::AppState;
use crate::api::handlers::facility_handler::*;
use axum::{Router, routing::get};

pub fn create_facility_router() -> Router<AppState> {
    Router::new().route("/facilities", get(list_facilities))
}
