// Prompt template for timetable generation.
// Values are interpolated verbatim: no escaping, no sanitisation.

use chrono::NaiveTime;

use crate::timetable::models::TimetableRequest;
use crate::timetable::parser::{Column, TableSchema};

/// Timetable prompt template.
/// Replace: {class_level}, {stream}, {target_exam}, {start_time}, {end_time},
///          {hours}, {purpose}, {columns}, {example_table}, {number_of_days}, {focus}
pub const TIMETABLE_PROMPT_TEMPLATE: &str = r#"You are an expert in education planning for Indian students based on the NCERT syllabus. Create a detailed study timetable for a student with the following details:
- **Class Level**: {class_level}
- **Stream**: {stream}
- **Target Exam**: {target_exam}
- **Daily Schedule**: From {start_time} to {end_time} ({hours} hours per day)
- **Purpose**: {purpose}{focus}

### Instructions:
1. Allocate study hours equally across NCERT subjects for the given class and stream.
2. Incorporate logical sequencing of chapters/topics from NCERT, starting with fundamentals and progressively moving to advanced concepts.
3. Divide daily hours among subjects, ensuring:
   - Balanced distribution for core subjects (e.g., Math, Physics, Chemistry).
   - Logical time intervals for each chapter/topic.
   - Include short breaks for better productivity.
4. Include a "Review/Practice" day every Friday.
5. Use these columns in the timetable:
   {columns}
6. For each day, provide:
   - Subject
   - Chapter/Topic
7. Base your plan on NCERT guidelines and the target exam's requirements.

Example format:
{example_table}

Based on the student's stream and target exam, create an appropriate curriculum that covers all necessary topics for {number_of_days} days.
Ensure topics are sequenced properly with fundamentals first, then advanced concepts."#;

const STREAM_NOT_SPECIFIED: &str = "Not specified";

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Whole hours print without decimals; anything else gets one decimal place.
pub fn daily_hours(start: NaiveTime, end: NaiveTime) -> String {
    let minutes = (end - start).num_minutes();
    if minutes % 60 == 0 {
        format!("{}", minutes / 60)
    } else {
        format!("{:.1}", minutes as f64 / 60.0)
    }
}

/// Header, separator and one skeleton row with the study window in the time slot.
pub fn example_table(schema: &TableSchema, time_window: &str) -> String {
    let separator: Vec<String> = schema
        .columns()
        .iter()
        .map(|c| "-".repeat(c.header().len().max(3)))
        .collect();
    let skeleton: Vec<&str> = schema
        .columns()
        .iter()
        .map(|&c| if c == Column::TimeSlot { time_window } else { "" })
        .collect();

    format!(
        "{}\n|{}|\n| {} |",
        schema.header_line(),
        separator.join("|"),
        skeleton.join(" | ")
    )
}

fn focus_lines(request: &TimetableRequest) -> String {
    let mut focus = String::new();
    if !request.subjects.is_empty() {
        focus.push_str("\n- **Focus Subjects**: ");
        focus.push_str(&request.subjects.join(", "));
    }
    if !request.chapters.is_empty() {
        focus.push_str("\n- **Chapters to Cover**: ");
        focus.push_str(&request.chapters.join("; "));
    }
    focus
}

/// Renders the full prompt for one validated request.
pub fn build_prompt(request: &TimetableRequest) -> String {
    let schema = request.layout.schema();
    let start = format_time(request.start_time);
    let end = format_time(request.end_time);
    let window = format!("{start}-{end}");

    TIMETABLE_PROMPT_TEMPLATE
        .replace("{class_level}", request.class_level.label())
        .replace(
            "{stream}",
            request.stream.map_or(STREAM_NOT_SPECIFIED, |s| s.label()),
        )
        .replace("{target_exam}", request.target_exam.label())
        .replace("{start_time}", &start)
        .replace("{end_time}", &end)
        .replace("{hours}", &daily_hours(request.start_time, request.end_time))
        .replace("{purpose}", request.purpose.label())
        .replace("{columns}", &schema.header_line())
        .replace("{example_table}", &example_table(&schema, &window))
        .replace("{number_of_days}", &request.number_of_days.to_string())
        // free text goes last so user input is never re-scanned for placeholders
        .replace("{focus}", &focus_lines(request))
}
