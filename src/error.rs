//! Error handling
//!
//! Application error type and its mapping onto HTTP responses.

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Storage backend failure
    #[error("Database error: {0}")]
    Database(String),

    /// Resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request parameters failed validation
    #[error("{0}")]
    Validation(String),

    /// Request body could not be parsed
    #[error("{0}")]
    BadRequest(String),

    /// External text-generation service failure
    #[error("AI service error: {0}")]
    Ai(String),

    /// Configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Ai(e.to_string())
    }
}

#[cfg(feature = "surrealdb")]
impl From<surrealdb::Error> for AppError {
    fn from(e: surrealdb::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        match &self {
            AppError::Database(_) | AppError::Io(_) => {
                tracing::error!(code = %code, "request failed: {}", self)
            }
            _ => tracing::debug!(code = %code, "request rejected: {}", self),
        }
        let body = Json(ErrorResponse::new(&code, &self.to_string()));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
    /// Machine readable code
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: message.to_string(),
            code: code.to_string(),
        }
    }
}

/// HTTP status mapping
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Validation(_) | AppError::BadRequest(_) => {
                (400, "BAD_REQUEST".to_string())
            }
            AppError::Ai(_) => (502, "AI_UNAVAILABLE".to_string()),
            AppError::Database(_) => (500, "DATABASE_ERROR".to_string()),
            _ => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, code) = (&AppError::Validation("empty".into())).into();
        assert_eq!(status, 400);
        assert_eq!(code, "BAD_REQUEST");

        let (status, _) = (&AppError::NotFound("child 7".into())).into();
        assert_eq!(status, 404);

        let (status, _) = (&AppError::Database("down".into())).into();
        assert_eq!(status, 500);
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = AppError::Validation("Message cannot be empty".into());
        assert_eq!(err.to_string(), "Message cannot be empty");
    }

    #[test]
    fn test_error_response_body() {
        let body = serde_json::to_value(ErrorResponse::new("BAD_REQUEST", "oops")).unwrap();
        assert_eq!(body, serde_json::json!({"error": "oops", "code": "BAD_REQUEST"}));
    }
}
