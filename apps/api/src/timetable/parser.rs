//! Markdown pipe-table parser for generated timetables.
//!
//! The model is asked for a table but nothing guarantees it complies, so every
//! parse runs against an explicit `TableSchema`. `ParseMode::Lenient` keeps
//! whatever lines up (absent cells become `None`); `ParseMode::Strict` fails on
//! the first row whose cell count differs from the schema.

use serde::Serialize;
use thiserror::Error;

/// Number of leading lines treated as header + separator and skipped.
const HEADER_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Days,
    TimeSlot,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Days => "Days",
            Column::TimeSlot => "Time Slot",
            Column::Sunday => "Sunday",
            Column::Monday => "Monday",
            Column::Tuesday => "Tuesday",
            Column::Wednesday => "Wednesday",
            Column::Thursday => "Thursday",
            Column::Friday => "Friday",
            Column::Saturday => "Saturday",
        }
    }

    /// Label columns get row-header styling instead of keyword highlighting.
    pub fn is_label(self) -> bool {
        matches!(self, Column::Days | Column::TimeSlot)
    }
}

/// Expected column order of a generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Time slot followed by Sunday through Friday.
    pub fn compact() -> Self {
        Self::new(vec![
            Column::TimeSlot,
            Column::Sunday,
            Column::Monday,
            Column::Tuesday,
            Column::Wednesday,
            Column::Thursday,
            Column::Friday,
        ])
    }

    /// Days label, time slot, then Monday through Sunday.
    pub fn extended() -> Self {
        Self::new(vec![
            Column::Days,
            Column::TimeSlot,
            Column::Monday,
            Column::Tuesday,
            Column::Wednesday,
            Column::Thursday,
            Column::Friday,
            Column::Saturday,
            Column::Sunday,
        ])
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Markdown header line for this schema, e.g. `| Time Slot | Sunday | ... |`.
    pub fn header_line(&self) -> String {
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header()).collect();
        format!("| {} |", headers.join(" | "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub column: Column,
    pub text: Option<String>,
}

/// One data line of the table, mapped positionally onto the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableRow {
    pub cells: Vec<Cell>,
}

impl TimetableRow {
    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .and_then(|c| c.text.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

/// A row whose cell count did not match the schema (lenient mode only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowMismatch {
    /// 1-based index among data rows.
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTimetable {
    pub rows: Vec<TimetableRow>,
    pub mismatched_rows: Vec<RowMismatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("response contains no table rows")]
    NoRows,
}

/// Splits one table line into trimmed cells.
///
/// The empty fields produced by a leading and a trailing pipe are dropped;
/// interior empty cells are kept.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut fields: Vec<&str> = line.split('|').collect();
    if fields.first().is_some_and(|f| f.trim().is_empty()) {
        fields.remove(0);
    }
    if fields.last().is_some_and(|f| f.trim().is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

/// Parses generated markdown into rows.
///
/// The first two lines are skipped as header and separator. Every remaining
/// non-blank line containing a `|` is a data row.
pub fn parse_timetable(
    markdown: &str,
    schema: &TableSchema,
    mode: ParseMode,
) -> Result<ParsedTimetable, ParseError> {
    let mut rows = Vec::new();
    let mut mismatched_rows = Vec::new();

    let data_lines = markdown
        .lines()
        .skip(HEADER_LINES)
        .filter(|line| !line.trim().is_empty() && line.contains('|'));

    for (index, line) in data_lines.enumerate() {
        let mut values = split_cells(line).into_iter();
        let found = values.len();

        if found != schema.column_count() {
            let mismatch = RowMismatch {
                row: index + 1,
                expected: schema.column_count(),
                found,
            };
            if mode == ParseMode::Strict {
                return Err(ParseError::ColumnMismatch {
                    row: mismatch.row,
                    expected: mismatch.expected,
                    found: mismatch.found,
                });
            }
            mismatched_rows.push(mismatch);
        }

        let cells = schema
            .columns()
            .iter()
            .map(|&column| Cell {
                column,
                text: values.next(),
            })
            .collect();
        rows.push(TimetableRow { cells });
    }

    if mode == ParseMode::Strict && rows.is_empty() {
        return Err(ParseError::NoRows);
    }

    Ok(ParsedTimetable {
        rows,
        mismatched_rows,
    })
}
