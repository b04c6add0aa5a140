//! Axum route handlers for the HTML form.

use axum::{extract::State, response::Html, Form};

use crate::errors::AppError;
use crate::presentation::controller::{submit, FormView};
use crate::presentation::form::{FormState, FormSubmission};
use crate::state::AppState;

/// GET /
///
/// Empty form with default study window.
pub async fn handle_form_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = state
        .pages
        .render_form_page(&FormView::default())
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Html(html))
}

/// POST /
///
/// Runs one submission and re-renders the page with either the table or the error.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Result<Html<String>, AppError> {
    let mut view = FormView::new(FormState::default());
    for event in submission.into_events() {
        view.apply(event);
    }
    let view = submit(view, state.llm.as_ref(), state.parse_mode).await;

    let html = state
        .pages
        .render_form_page(&view)
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Html(html))
}
