use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::presentation::render::Pages;
use crate::timetable::parser::ParseMode;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generator. Production: `LlmClient`; tests swap in a stub.
    pub llm: Arc<dyn TextGenerator>,
    pub pages: Arc<Pages>,
    /// How the HTML form treats tables that do not match the column layout.
    pub parse_mode: ParseMode,
}
