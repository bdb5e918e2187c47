use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::maternal_dto::*},
    error::AppError,
};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub async fn register_pregnancy(
    State(state): State<AppState>,
    payload: Result<Json<PregnancyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let today = today();

    let record = state
        .maternal_service
        .register_pregnancy(request.last_period_date, today)
        .await?;

    Ok((StatusCode::CREATED, Json(PregnancyResponse::new(&record, today))))
}

pub async fn register_child(
    State(state): State<AppState>,
    payload: Result<Json<ChildRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;

    let (child, vaccinations) = state
        .maternal_service
        .register_child(&request.child_name, request.birth_date, today())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ChildResponse {
            id: child.id,
            child_name: child.child_name,
            birth_date: child.birth_date,
            vaccinations,
        }),
    ))
}

pub async fn list_vaccinations(
    State(state): State<AppState>,
    child_id: Result<Path<u64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(child_id) = child_id?;
    debug!(child_id, "Listing vaccinations");

    let vaccinations = state.maternal_service.schedule(child_id).await?;
    let completed = vaccinations.iter().filter(|r| r.is_completed).count();

    Ok(Json(VaccinationListResponse {
        child_id,
        vaccinations,
        completed,
    }))
}

pub async fn complete_vaccination(
    State(state): State<AppState>,
    record_id: Result<Path<u64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(record_id) = record_id?;
    let record = state
        .maternal_service
        .complete_vaccination(record_id, today())
        .await?;
    Ok(Json(record))
}
