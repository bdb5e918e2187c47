use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    api::{app_state::AppState, dto::help_dto::*},
    error::AppError,
};

pub async fn submit_help_request(
    State(state): State<AppState>,
    payload: Result<Form<HelpRequestForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = payload?;

    let request = state
        .help_request_service
        .submit(
            &form.help_type,
            &form.description,
            form.contact_preference.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(HelpRequestResponse {
            status: "success",
            message: SUBMITTED_MESSAGE,
            reference: request.reference,
        }),
    ))
}
