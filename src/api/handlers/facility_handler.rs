use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::facility_dto::*},
    error::AppError,
};

pub async fn list_facilities(
    State(state): State<AppState>,
    params: Result<Query<FacilityParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    debug!(upazila = ?params.upazila, "Listing facilities");

    let facilities: Vec<FacilityResponse> = state
        .directory
        .list_facilities(params.upazila.as_deref())
        .await?
        .into_iter()
        .map(FacilityResponse::from)
        .collect();

    Ok(Json(FacilityListResponse {
        total: facilities.len(),
        facilities,
    }))
}
