//! Form state as a single explicit record, updated by a pure reducer.

use serde::{Deserialize, Serialize};

use crate::timetable::models::{DaysValue, RawTimetableRequest, TableLayout};

/// Everything the form holds, exactly as the user typed or picked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub class_level: String,
    pub stream: String,
    pub target_exam: String,
    pub start_time: String,
    pub end_time: String,
    pub number_of_days: String,
    pub purpose: String,
    pub subjects: Vec<String>,
    pub chapters: Vec<String>,
    pub layout: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            class_level: String::new(),
            stream: String::new(),
            target_exam: String::new(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            number_of_days: "30".to_string(),
            purpose: String::new(),
            subjects: Vec::new(),
            chapters: Vec::new(),
            layout: TableLayout::default().label().to_string(),
        }
    }
}

/// One field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetClassLevel(String),
    SetStream(String),
    SetTargetExam(String),
    SetStartTime(String),
    SetEndTime(String),
    SetNumberOfDays(String),
    SetPurpose(String),
    /// Adds the subject if absent, removes it if present.
    ToggleSubject(String),
    SetChapters(Vec<String>),
    SetLayout(String),
}

pub fn reduce(state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::SetClassLevel(class_level) => FormState {
            class_level,
            ..state
        },
        FormEvent::SetStream(stream) => FormState { stream, ..state },
        FormEvent::SetTargetExam(target_exam) => FormState {
            target_exam,
            ..state
        },
        FormEvent::SetStartTime(start_time) => FormState {
            start_time,
            ..state
        },
        FormEvent::SetEndTime(end_time) => FormState { end_time, ..state },
        FormEvent::SetNumberOfDays(number_of_days) => FormState {
            number_of_days,
            ..state
        },
        FormEvent::SetPurpose(purpose) => FormState { purpose, ..state },
        FormEvent::ToggleSubject(subject) => {
            let mut subjects = state.subjects;
            if let Some(pos) = subjects.iter().position(|s| *s == subject) {
                subjects.remove(pos);
            } else {
                subjects.push(subject);
            }
            FormState { subjects, ..state }
        }
        FormEvent::SetChapters(chapters) => FormState { chapters, ..state },
        FormEvent::SetLayout(layout) => FormState { layout, ..state },
    }
}

impl FormState {
    /// The request body this form would submit.
    pub fn to_raw(&self) -> RawTimetableRequest {
        let opt = |s: &str| Some(s.to_string());
        RawTimetableRequest {
            class_level: opt(&self.class_level),
            stream: opt(&self.stream),
            target_exam: opt(&self.target_exam),
            start_time: opt(&self.start_time),
            end_time: opt(&self.end_time),
            number_of_days: Some(DaysValue::Text(self.number_of_days.clone())),
            purpose: opt(&self.purpose),
            subjects: self.subjects.clone(),
            chapters: self.chapters.clone(),
            layout: opt(&self.layout),
        }
    }

    pub fn layout(&self) -> TableLayout {
        self.layout.parse().unwrap_or_default()
    }
}

/// Fields posted by the HTML form. Unchecked radio groups are simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    pub class_level: Option<String>,
    pub stream: Option<String>,
    pub target_exam: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub number_of_days: Option<String>,
    pub purpose: Option<String>,
    /// Comma-separated.
    pub subjects: Option<String>,
    /// One chapter per line.
    pub chapters: Option<String>,
    pub layout: Option<String>,
}

impl FormSubmission {
    /// Replays the submission as the field-change events a user would have produced.
    pub fn into_events(self) -> Vec<FormEvent> {
        let mut events = Vec::new();
        let mut push = |value: Option<String>, make: fn(String) -> FormEvent| {
            if let Some(value) = value {
                events.push(make(value));
            }
        };
        push(self.class_level, FormEvent::SetClassLevel);
        push(self.stream, FormEvent::SetStream);
        push(self.target_exam, FormEvent::SetTargetExam);
        push(self.start_time, FormEvent::SetStartTime);
        push(self.end_time, FormEvent::SetEndTime);
        push(self.number_of_days, FormEvent::SetNumberOfDays);
        push(self.purpose, FormEvent::SetPurpose);
        push(self.layout, FormEvent::SetLayout);

        if let Some(subjects) = self.subjects {
            // Replayed into an empty set, so each distinct subject is toggled once.
            let mut seen: Vec<&str> = Vec::new();
            for subject in subjects.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                if seen.iter().any(|s| s.eq_ignore_ascii_case(subject)) {
                    continue;
                }
                seen.push(subject);
                events.push(FormEvent::ToggleSubject(subject.to_string()));
            }
        }
        if let Some(chapters) = self.chapters {
            let chapters = chapters
                .lines()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
            events.push(FormEvent::SetChapters(chapters));
        }
        events
    }
}
