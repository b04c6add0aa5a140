//! Axum route handlers for the Timetable API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::timetable::generator::generate_timetable;
use crate::timetable::models::RawTimetableRequest;
use crate::timetable::validation::validate_request;

#[derive(Debug, Serialize)]
pub struct GenerateTimetableResponse {
    pub timetable: String,
}

/// POST /api/generate-timetable
///
/// Validates the form fields, renders the prompt and returns the model's raw
/// markdown. Parsing into rows is left to the caller.
pub async fn handle_generate_timetable(
    State(state): State<AppState>,
    payload: Result<Json<RawTimetableRequest>, JsonRejection>,
) -> Result<Json<GenerateTimetableResponse>, AppError> {
    let Json(raw) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let request = validate_request(&raw)?;
    let timetable = generate_timetable(state.llm.as_ref(), &request).await?;

    Ok(Json(GenerateTimetableResponse { timetable }))
}
