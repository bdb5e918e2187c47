//! HTTP API
//!
//! JSON and form endpoints under `/api/v1`.

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::observability::metrics_middleware;
use axum::{Router, http::Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::voice_routes::create_voice_router())
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::facility_routes::create_facility_router())
        .merge(routes::mood_routes::create_mood_router())
        .merge(routes::help_routes::create_help_router())
        .merge(routes::maternal_routes::create_maternal_router());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api)
        .layer(axum::middleware::from_fn_with_state(
            app_state.metrics.clone(),
            metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
