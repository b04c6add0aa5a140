// Form and presentation layer: form state, submission lifecycle, highlighting
// and HTML rendering. Generation goes through timetable::generator.

pub mod controller;
pub mod form;
pub mod handlers;
pub mod highlight;
pub mod render;
