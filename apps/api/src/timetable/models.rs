//! Request model for timetable generation.
//!
//! `RawTimetableRequest` is what arrives on the wire: every field optional, so a
//! missing value surfaces as "All fields are required" instead of an extractor
//! rejection. `validation::validate_request` turns it into a `TimetableRequest`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::timetable::parser::TableSchema;

/// Error returned when a label does not name any known choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLevel {
    Ten,
    Eleven,
    Twelve,
    Repeater,
}

impl ClassLevel {
    pub const ALL: [ClassLevel; 4] = [
        ClassLevel::Ten,
        ClassLevel::Eleven,
        ClassLevel::Twelve,
        ClassLevel::Repeater,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClassLevel::Ten => "10",
            ClassLevel::Eleven => "11",
            ClassLevel::Twelve => "12",
            ClassLevel::Repeater => "Repeater",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Science,
    Commerce,
}

impl Stream {
    pub const ALL: [Stream; 2] = [Stream::Science, Stream::Commerce];

    pub fn label(self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetExam {
    Jee,
    Neet,
    Others,
}

impl TargetExam {
    pub const ALL: [TargetExam; 3] = [TargetExam::Jee, TargetExam::Neet, TargetExam::Others];

    pub fn label(self) -> &'static str {
        match self {
            TargetExam::Jee => "JEE",
            TargetExam::Neet => "NEET",
            TargetExam::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Revisions,
    SyllabusCompletion,
    ClearingBacklogs,
    CompetitiveExams,
}

impl Purpose {
    pub const ALL: [Purpose; 4] = [
        Purpose::Revisions,
        Purpose::SyllabusCompletion,
        Purpose::ClearingBacklogs,
        Purpose::CompetitiveExams,
    ];

    /// Wire labels match what the form has always offered, spelling included.
    pub fn label(self) -> &'static str {
        match self {
            Purpose::Revisions => "Revisions",
            Purpose::SyllabusCompletion => "Syllabus completion",
            Purpose::ClearingBacklogs => "Clearing Backlogs",
            Purpose::CompetitiveExams => "Competative-exams",
        }
    }
}

/// Which table shape the caller wants back.
///
/// `Compact` is seven columns (time slot, Sunday to Friday) and requires a stream.
/// `Extended` is nine columns (days label, time slot, Monday to Sunday), makes the
/// stream optional, and accepts focus subjects and chapters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableLayout {
    #[default]
    Compact,
    Extended,
}

impl TableLayout {
    pub const ALL: [TableLayout; 2] = [TableLayout::Compact, TableLayout::Extended];

    pub fn label(self) -> &'static str {
        match self {
            TableLayout::Compact => "compact",
            TableLayout::Extended => "extended",
        }
    }

    pub fn schema(self) -> TableSchema {
        match self {
            TableLayout::Compact => TableSchema::compact(),
            TableLayout::Extended => TableSchema::extended(),
        }
    }

    pub fn requires_stream(self) -> bool {
        matches!(self, TableLayout::Compact)
    }
}

fn parse_choice<T: Copy>(
    value: &str,
    all: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, UnknownChoice> {
    let value = value.trim();
    all.iter()
        .copied()
        .find(|c| label(*c).eq_ignore_ascii_case(value))
        .ok_or_else(|| UnknownChoice(value.to_string()))
}

impl FromStr for ClassLevel {
    type Err = UnknownChoice;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, Self::label)
    }
}

impl FromStr for Stream {
    type Err = UnknownChoice;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, Self::label)
    }
}

impl FromStr for TargetExam {
    type Err = UnknownChoice;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, Self::label)
    }
}

impl FromStr for Purpose {
    type Err = UnknownChoice;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, Self::label)
    }
}

impl FromStr for TableLayout {
    type Err = UnknownChoice;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL, Self::label)
    }
}

impl fmt::Display for TableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `numberOfDays` arrives as a number from API callers and as a string from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaysValue {
    Number(i64),
    Text(String),
}

/// Request body as received on `POST /api/generate-timetable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimetableRequest {
    pub class_level: Option<String>,
    pub stream: Option<String>,
    pub target_exam: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub number_of_days: Option<DaysValue>,
    pub purpose: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub chapters: Vec<String>,
    pub layout: Option<String>,
}

/// A validated timetable request. Lives for exactly one request/response cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableRequest {
    pub class_level: ClassLevel,
    pub stream: Option<Stream>,
    pub target_exam: TargetExam,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// 1..=365
    pub number_of_days: u16,
    pub purpose: Purpose,
    /// Distinct, in the order given.
    pub subjects: Vec<String>,
    pub chapters: Vec<String>,
    pub layout: TableLayout,
}
