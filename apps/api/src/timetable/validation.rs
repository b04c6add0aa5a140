//! Server-side validation: turns a `RawTimetableRequest` into a `TimetableRequest`.
//!
//! Nothing here talks to the LLM. A request that fails validation never reaches
//! the generator.

use chrono::NaiveTime;
use thiserror::Error;

use crate::timetable::models::{
    DaysValue, RawTimetableRequest, TableLayout, TimetableRequest, UnknownChoice,
};

pub const MIN_DAYS: u16 = 1;
pub const MAX_DAYS: u16 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid {field}: '{value}'")]
    InvalidChoice { field: &'static str, value: String },

    #[error("Invalid {field}: '{value}' is not a time of day (expected HH:MM)")]
    InvalidTime { field: &'static str, value: String },

    #[error("End time must be after start time")]
    InvalidTimeRange,

    #[error("Number of days must be between 1 and 365")]
    InvalidNumberOfDays,
}

/// Parses a wall-clock time of day. Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

/// Both times are read as instants on the same day; end must be strictly later.
pub fn validate_time_range(start: NaiveTime, end: NaiveTime) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::InvalidTimeRange);
    }
    Ok(())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn days_present(value: &Option<DaysValue>) -> bool {
    match value {
        Some(DaysValue::Number(_)) => true,
        Some(DaysValue::Text(text)) => !text.trim().is_empty(),
        None => false,
    }
}

fn parse_days(value: &DaysValue) -> Result<u16, ValidationError> {
    let days = match value {
        DaysValue::Number(n) => *n,
        DaysValue::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidNumberOfDays)?,
    };
    u16::try_from(days)
        .ok()
        .filter(|d| (MIN_DAYS..=MAX_DAYS).contains(d))
        .ok_or(ValidationError::InvalidNumberOfDays)
}

fn choice<T: std::str::FromStr<Err = UnknownChoice>>(
    field: &'static str,
    value: &str,
) -> Result<T, ValidationError> {
    value
        .parse::<T>()
        .map_err(|UnknownChoice(value)| ValidationError::InvalidChoice { field, value })
}

/// Trims entries, drops blanks, and keeps the first occurrence of each subject.
fn clean_list(items: &[String], dedup: bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if dedup && out.iter().any(|seen| seen.eq_ignore_ascii_case(item)) {
            continue;
        }
        out.push(item.to_string());
    }
    out
}

/// Validates every field of a raw request.
///
/// Missing values are checked first so that any absent field yields
/// `MissingFields` regardless of what else is wrong.
pub fn validate_request(raw: &RawTimetableRequest) -> Result<TimetableRequest, ValidationError> {
    let (Some(class_level), Some(target_exam), Some(start), Some(end), Some(purpose)) = (
        present(&raw.class_level),
        present(&raw.target_exam),
        present(&raw.start_time),
        present(&raw.end_time),
        present(&raw.purpose),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    if !days_present(&raw.number_of_days) {
        return Err(ValidationError::MissingFields);
    }

    // Whether stream is required depends on the layout, so an unusable layout
    // with no stream still counts as a missing field.
    let stream = present(&raw.stream);
    let layout = match present(&raw.layout) {
        Some(value) => match choice::<TableLayout>("layout", value) {
            Ok(layout) => layout,
            Err(_) if stream.is_none() => return Err(ValidationError::MissingFields),
            Err(e) => return Err(e),
        },
        None => TableLayout::default(),
    };
    if layout.requires_stream() && stream.is_none() {
        return Err(ValidationError::MissingFields);
    }

    let start_time = parse_time("startTime", start)?;
    let end_time = parse_time("endTime", end)?;
    validate_time_range(start_time, end_time)?;

    let number_of_days = match &raw.number_of_days {
        Some(days) => parse_days(days)?,
        None => return Err(ValidationError::MissingFields),
    };

    let (subjects, chapters) = match layout {
        TableLayout::Extended => (
            clean_list(&raw.subjects, true),
            clean_list(&raw.chapters, false),
        ),
        TableLayout::Compact => (Vec::new(), Vec::new()),
    };

    Ok(TimetableRequest {
        class_level: choice("classLevel", class_level)?,
        stream: stream.map(|s| choice("stream", s)).transpose()?,
        target_exam: choice("targetExam", target_exam)?,
        start_time,
        end_time,
        number_of_days,
        purpose: choice("purpose", purpose)?,
        subjects,
        chapters,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::models::{ClassLevel, Purpose, Stream, TargetExam};

    fn valid_raw() -> RawTimetableRequest {
        RawTimetableRequest {
            class_level: Some("11".to_string()),
            stream: Some("Science".to_string()),
            target_exam: Some("JEE".to_string()),
            start_time: Some("09:00".to_string()),
            end_time: Some("17:00".to_string()),
            number_of_days: Some(DaysValue::Text("30".to_string())),
            purpose: Some("Syllabus completion".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_is_accepted() {
        let request = validate_request(&valid_raw()).unwrap();
        assert_eq!(request.class_level, ClassLevel::Eleven);
        assert_eq!(request.stream, Some(Stream::Science));
        assert_eq!(request.target_exam, TargetExam::Jee);
        assert_eq!(request.purpose, Purpose::SyllabusCompletion);
        assert_eq!(request.number_of_days, 30);
        assert_eq!(request.layout, TableLayout::Compact);
        assert_eq!(request.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn test_each_missing_field_yields_all_fields_required() {
        let clears: [fn(&mut RawTimetableRequest); 7] = [
            |r| r.class_level = None,
            |r| r.stream = None,
            |r| r.target_exam = None,
            |r| r.start_time = None,
            |r| r.end_time = None,
            |r| r.number_of_days = None,
            |r| r.purpose = None,
        ];
        for clear in clears {
            let mut raw = valid_raw();
            clear(&mut raw);
            let err = validate_request(&raw).unwrap_err();
            assert_eq!(err, ValidationError::MissingFields);
            assert_eq!(err.to_string(), "All fields are required");
        }
    }

    #[test]
    fn test_blank_strings_count_as_missing() {
        let mut raw = valid_raw();
        raw.purpose = Some("   ".to_string());
        assert_eq!(validate_request(&raw), Err(ValidationError::MissingFields));

        let mut raw = valid_raw();
        raw.number_of_days = Some(DaysValue::Text(String::new()));
        assert_eq!(validate_request(&raw), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_missing_field_wins_over_other_problems() {
        let mut raw = valid_raw();
        raw.class_level = None;
        raw.end_time = Some("08:00".to_string());
        assert_eq!(validate_request(&raw), Err(ValidationError::MissingFields));

        let mut raw = valid_raw();
        raw.purpose = None;
        raw.layout = Some("wide".to_string());
        assert_eq!(validate_request(&raw), Err(ValidationError::MissingFields));

        let mut raw = valid_raw();
        raw.stream = None;
        raw.layout = Some("wide".to_string());
        assert_eq!(validate_request(&raw), Err(ValidationError::MissingFields));

        let raw = RawTimetableRequest {
            layout: Some("wide".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_request(&raw), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_unknown_layout_with_all_fields_is_invalid_choice() {
        let mut raw = valid_raw();
        raw.layout = Some("wide".to_string());
        assert_eq!(
            validate_request(&raw),
            Err(ValidationError::InvalidChoice {
                field: "layout",
                value: "wide".to_string()
            })
        );
    }

    #[test]
    fn test_stream_is_optional_for_extended_layout() {
        let mut raw = valid_raw();
        raw.stream = None;
        raw.layout = Some("extended".to_string());
        let request = validate_request(&raw).unwrap();
        assert_eq!(request.stream, None);
        assert_eq!(request.layout, TableLayout::Extended);
    }

    #[test]
    fn test_end_time_must_be_strictly_after_start() {
        let mut raw = valid_raw();
        raw.end_time = Some("09:00".to_string());
        assert_eq!(validate_request(&raw), Err(ValidationError::InvalidTimeRange));

        raw.end_time = Some("08:59".to_string());
        assert_eq!(validate_request(&raw), Err(ValidationError::InvalidTimeRange));
    }

    #[test]
    fn test_time_with_seconds_is_accepted() {
        let time = parse_time("startTime", "06:30:15").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(6, 30, 15).unwrap());
    }

    #[test]
    fn test_garbage_time_is_rejected() {
        let mut raw = valid_raw();
        raw.start_time = Some("nine".to_string());
        assert!(matches!(
            validate_request(&raw),
            Err(ValidationError::InvalidTime { field: "startTime", .. })
        ));
    }

    #[test]
    fn test_number_of_days_bounds() {
        for (days, ok) in [(0, false), (1, true), (365, true), (366, false), (-4, false)] {
            let mut raw = valid_raw();
            raw.number_of_days = Some(DaysValue::Number(days));
            assert_eq!(validate_request(&raw).is_ok(), ok, "days = {days}");
        }

        let mut raw = valid_raw();
        raw.number_of_days = Some(DaysValue::Text("thirty".to_string()));
        assert_eq!(validate_request(&raw), Err(ValidationError::InvalidNumberOfDays));
    }

    #[test]
    fn test_unknown_choice_names_the_field() {
        let mut raw = valid_raw();
        raw.target_exam = Some("GRE".to_string());
        assert_eq!(
            validate_request(&raw),
            Err(ValidationError::InvalidChoice {
                field: "targetExam",
                value: "GRE".to_string()
            })
        );
    }

    #[test]
    fn test_extended_layout_cleans_subjects_and_chapters() {
        let mut raw = valid_raw();
        raw.layout = Some("extended".to_string());
        raw.subjects = vec![
            "Physics".to_string(),
            " physics ".to_string(),
            "".to_string(),
            "Chemistry".to_string(),
        ];
        raw.chapters = vec!["  Kinematics ".to_string(), " ".to_string()];

        let request = validate_request(&raw).unwrap();
        assert_eq!(request.subjects, vec!["Physics", "Chemistry"]);
        assert_eq!(request.chapters, vec!["Kinematics"]);
    }

    #[test]
    fn test_compact_layout_ignores_subjects() {
        let mut raw = valid_raw();
        raw.subjects = vec!["Physics".to_string()];
        let request = validate_request(&raw).unwrap();
        assert!(request.subjects.is_empty());
    }
}
