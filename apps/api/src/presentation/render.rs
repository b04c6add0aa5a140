//! HTML rendering of the form page and the generated table.
//!
//! Templates are `.html`, so minijinja auto-escapes everything interpolated,
//! model output included.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::presentation::controller::FormView;
use crate::presentation::highlight::cell_style;
use crate::timetable::models::{ClassLevel, Purpose, Stream, TableLayout, TargetExam};
use crate::timetable::parser::{TableSchema, TimetableRow};
use crate::timetable::validation::{MAX_DAYS, MIN_DAYS};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const LABEL_CELL_CLASS: &str = "whitespace-nowrap font-medium text-gray-900 bg-gray-50";

#[derive(Debug, Serialize)]
struct RadioGroup<'a> {
    title: &'static str,
    name: &'static str,
    options: Vec<&'static str>,
    selected: &'a str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub class: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<CellView>>,
}

impl TableView {
    /// One cell per schema column; absent cells render as empty text.
    pub fn build(schema: &TableSchema, rows: &[TimetableRow]) -> Self {
        let headers = schema.columns().iter().map(|c| c.header()).collect();
        let rows = rows
            .iter()
            .map(|row| {
                schema
                    .columns()
                    .iter()
                    .map(|&column| {
                        let text = row.get(column);
                        CellView {
                            text: text.unwrap_or_default().to_string(),
                            class: if column.is_label() {
                                LABEL_CELL_CLASS
                            } else {
                                cell_style(text).class()
                            },
                        }
                    })
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }
}

/// Compiled page templates. Built once at startup and shared through `AppState`.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render_form_page(&self, view: &FormView) -> Result<String, minijinja::Error> {
        let form = &view.form;
        let radio_groups = vec![
            RadioGroup {
                title: "Class Level",
                name: "class_level",
                options: ClassLevel::ALL.iter().map(|c| c.label()).collect(),
                selected: &form.class_level,
            },
            RadioGroup {
                title: "Stream",
                name: "stream",
                options: Stream::ALL.iter().map(|s| s.label()).collect(),
                selected: &form.stream,
            },
            RadioGroup {
                title: "Target Exam",
                name: "target_exam",
                options: TargetExam::ALL.iter().map(|e| e.label()).collect(),
                selected: &form.target_exam,
            },
            RadioGroup {
                title: "Purpose",
                name: "purpose",
                options: Purpose::ALL.iter().map(|p| p.label()).collect(),
                selected: &form.purpose,
            },
            RadioGroup {
                title: "Table Layout",
                name: "layout",
                options: TableLayout::ALL.iter().map(|l| l.label()).collect(),
                selected: &form.layout,
            },
        ];

        let table = match (&view.schema, &view.rows) {
            (Some(schema), Some(rows)) => Some(TableView::build(schema, rows)),
            _ => None,
        };

        self.env.get_template("index.html")?.render(context! {
            form,
            radio_groups,
            min_days => MIN_DAYS,
            max_days => MAX_DAYS,
            error => &view.error,
            in_flight => view.is_in_flight(),
            table,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::form::{reduce, FormEvent, FormState};
    use crate::timetable::parser::{parse_timetable, ParseMode};

    fn view_with_table(markdown: &str, schema: TableSchema) -> FormView {
        let parsed = parse_timetable(markdown, &schema, ParseMode::Lenient).unwrap();
        FormView {
            rows: Some(parsed.rows),
            schema: Some(schema),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_page_has_form_defaults_and_no_table() {
        let html = Pages::new().unwrap().render_form_page(&FormView::default()).unwrap();

        assert!(html.contains(r#"name="start_time" value="09:00""#));
        assert!(html.contains(r#"name="end_time" value="17:00""#));
        assert!(html.contains(r#"value="30""#));
        assert!(html.contains(r#"min="1" max="365""#));
        assert!(html.contains(r#"value="Competative-exams""#));
        assert!(html.contains("Generate Timetable"));
        assert!(!html.contains("<table"));
        assert!(!html.contains(r#"role="alert""#));
    }

    #[test]
    fn test_selected_choice_is_checked() {
        let form = reduce(FormState::default(), FormEvent::SetTargetExam("NEET".into()));
        let html = Pages::new()
            .unwrap()
            .render_form_page(&FormView::new(form))
            .unwrap();
        assert!(html.contains(r#"name="target_exam" value="NEET" checked"#));
        assert!(!html.contains(r#"name="target_exam" value="JEE" checked"#));
    }

    #[test]
    fn test_error_is_shown_in_alert() {
        let view = FormView {
            error: Some("End time must be after start time".to_string()),
            ..Default::default()
        };
        let html = Pages::new().unwrap().render_form_page(&view).unwrap();
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("End time must be after start time"));
    }

    #[test]
    fn test_table_cells_are_escaped_and_highlighted() {
        let markdown = "h\ns\n| 09:00 | <script>x</script> | Break | Quiz | a | b | c |\n";
        let view = view_with_table(markdown, TableSchema::compact());

        let html = Pages::new().unwrap().render_form_page(&view).unwrap();

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"<td class="px-3 py-2 text-xs bg-yellow-100">Break</td>"#));
        assert!(html.contains(r#"<td class="px-3 py-2 text-xs bg-gray-200">Quiz</td>"#));
    }

    #[test]
    fn test_table_view_pads_short_rows_with_empty_cells() {
        let schema = TableSchema::extended();
        let parsed = parse_timetable("h\ns\n| Day 1 | 09:00 | Physics |\n", &schema, ParseMode::Lenient)
            .unwrap();

        let table = TableView::build(&schema, &parsed.rows);

        assert_eq!(table.headers.len(), 9);
        assert_eq!(table.rows[0].len(), 9);
        assert_eq!(table.rows[0][0].class, LABEL_CELL_CLASS);
        assert_eq!(table.rows[0][2].text, "Physics");
        assert_eq!(
            table.rows[0][8],
            CellView {
                text: String::new(),
                class: "bg-white"
            }
        );
    }
}
