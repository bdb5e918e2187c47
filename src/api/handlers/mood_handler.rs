use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    api::{app_state::AppState, dto::mood_dto::*},
    error::AppError,
    services::mood::RECENT_CHECKINS,
};

pub async fn create_checkin(
    State(state): State<AppState>,
    payload: Result<Form<MoodCheckInForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = payload?;

    let checkin = state
        .mood_service
        .record(&form.mood, form.notes.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MoodCheckInCreated {
            status: "success",
            id: checkin.id,
        }),
    ))
}

pub async fn list_checkins(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let checkins = state
        .mood_service
        .recent(RECENT_CHECKINS)
        .await?
        .into_iter()
        .map(MoodCheckInResponse::from)
        .collect();

    Ok(Json(MoodCheckInListResponse { checkins }))
}
