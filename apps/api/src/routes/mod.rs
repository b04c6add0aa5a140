pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::presentation::handlers as pages;
use crate::state::AppState;
use crate::timetable::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // JSON API
        .route(
            "/api/generate-timetable",
            post(handlers::handle_generate_timetable),
        )
        // HTML form
        .route(
            "/",
            get(pages::handle_form_page).post(pages::handle_form_submit),
        )
        .with_state(state)
}
