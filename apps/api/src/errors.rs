use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::timetable::validation::ValidationError;

/// Message shown to callers whenever generation fails for any reason.
pub const GENERATION_FAILED: &str = "Failed to generate timetable";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message a user gets to see. Server-side failures collapse to a generic one.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Llm(_) | AppError::Internal(_) => GENERATION_FAILED.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Llm(e) => tracing::error!("Error generating timetable: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::Validation(_) | AppError::BadRequest(_) => {}
        }

        let body = Json(json!({ "error": self.public_message() }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400_with_message() {
        let err = AppError::from(ValidationError::MissingFields);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "All fields are required");
    }

    #[test]
    fn test_llm_error_is_masked_as_generic_500() {
        let err = AppError::from(LlmError::Api {
            status: 401,
            message: "invalid api key".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), GENERATION_FAILED);
    }

    #[test]
    fn test_internal_error_is_masked_as_generic_500() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), GENERATION_FAILED);
    }
}
