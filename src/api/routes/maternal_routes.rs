use crate::api::app_state::AppState;
use crate::api::handlers::maternal_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

pub fn create_maternal_router() -> Router<AppState> {
    Router::new()
        .route("/maternal/pregnancy", post(register_pregnancy))
        .route("/maternal/children", post(register_child))
        .route("/maternal/children/:id/vaccinations", get(list_vaccinations))
        .route("/maternal/vaccinations/:id/complete", post(complete_vaccination))
}
