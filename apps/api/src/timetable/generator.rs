//! Timetable generation: one prompt, one LLM call, raw text back.
//!
//! No retries. A failed call is reported once and the request ends.

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::timetable::models::TimetableRequest;
use crate::timetable::prompts::build_prompt;

/// Builds the prompt for `request` and returns the model's raw markdown.
pub async fn generate_timetable(
    llm: &dyn TextGenerator,
    request: &TimetableRequest,
) -> Result<String, AppError> {
    let request_id = Uuid::new_v4();
    let prompt = build_prompt(request);

    info!(
        %request_id,
        layout = %request.layout,
        class_level = request.class_level.label(),
        target_exam = request.target_exam.label(),
        days = request.number_of_days,
        "Generating timetable"
    );

    let text = llm.generate(&prompt).await.map_err(|e| {
        warn!(%request_id, "Timetable generation failed: {e}");
        e
    })?;

    if text.trim().is_empty() {
        warn!(%request_id, "Timetable generation returned no text");
        return Err(AppError::Llm(LlmError::EmptyContent));
    }

    info!(%request_id, chars = text.len(), "Timetable generated");
    Ok(text)
}
