//! Submission lifecycle of the timetable form.
//!
//! Flow: begin_submit (client checks, phase -> InFlight) → server validation →
//! generation → parse → finish (phase -> Idle). Only one submission may be in
//! flight at a time.

use thiserror::Error;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::presentation::form::{reduce, FormEvent, FormState};
use crate::timetable::generator::generate_timetable;
use crate::timetable::models::RawTimetableRequest;
use crate::timetable::parser::{parse_timetable, ParseMode, TableSchema, TimetableRow};
use crate::timetable::validation::{parse_time, validate_request, validate_time_range};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    AlreadyInFlight,

    #[error("{0}")]
    Invalid(String),
}

/// What the page shows: the form, whether a request is running, the last error
/// and the last parsed table. Error and table are never both set.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub form: FormState,
    pub phase: SubmitPhase,
    pub error: Option<String>,
    pub rows: Option<Vec<TimetableRow>>,
    pub schema: Option<TableSchema>,
}

impl FormView {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, event: FormEvent) {
        self.form = reduce(std::mem::take(&mut self.form), event);
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == SubmitPhase::InFlight
    }

    /// Starts a submission: clears the previous outcome and runs client-side
    /// checks. On success the view is in flight and the request body is returned.
    pub fn begin_submit(&mut self) -> Result<RawTimetableRequest, SubmitBlocked> {
        if self.is_in_flight() {
            return Err(SubmitBlocked::AlreadyInFlight);
        }

        self.error = None;
        self.rows = None;
        self.schema = None;

        // Unparseable times are left for the server to report.
        if let (Ok(start), Ok(end)) = (
            parse_time("startTime", &self.form.start_time),
            parse_time("endTime", &self.form.end_time),
        ) {
            if let Err(e) = validate_time_range(start, end) {
                self.error = Some(e.to_string());
                return Err(SubmitBlocked::Invalid(e.to_string()));
            }
        }

        self.phase = SubmitPhase::InFlight;
        Ok(self.form.to_raw())
    }

    /// Ends the in-flight submission with the server's outcome.
    pub fn finish(&mut self, outcome: Result<String, AppError>, mode: ParseMode) {
        self.phase = SubmitPhase::Idle;

        let schema = self.form.layout().schema();
        let result = outcome.and_then(|markdown| {
            parse_timetable(&markdown, &schema, mode).map_err(|e| {
                warn!("Generated timetable did not match the expected table: {e}");
                AppError::Internal(e.into())
            })
        });

        match result {
            Ok(parsed) => {
                if !parsed.mismatched_rows.is_empty() {
                    warn!(
                        rows = parsed.mismatched_rows.len(),
                        "Generated timetable rows did not match the column layout"
                    );
                }
                self.error = None;
                self.rows = Some(parsed.rows);
                self.schema = Some(schema);
            }
            Err(e) => {
                self.error = Some(e.public_message());
                self.rows = None;
                self.schema = None;
            }
        }
    }
}

/// Runs one full submission against `llm` and returns the updated view.
///
/// Client-side rejections leave the view idle with the error set; no generation
/// call is made for them or for server-side validation failures.
pub async fn submit(mut view: FormView, llm: &dyn TextGenerator, mode: ParseMode) -> FormView {
    let raw = match view.begin_submit() {
        Ok(raw) => raw,
        Err(_) => return view,
    };

    let outcome = match validate_request(&raw) {
        Ok(request) => generate_timetable(llm, &request).await,
        Err(e) => Err(AppError::Validation(e)),
    };

    view.finish(outcome, mode);
    view
}
