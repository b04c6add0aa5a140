/// Background style for a timetable cell, picked by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Default,
    Highlighted,
    Quiz,
    Doubts,
}

impl CellStyle {
    pub fn class(self) -> &'static str {
        match self {
            CellStyle::Default => "bg-white",
            CellStyle::Highlighted => "bg-yellow-100",
            CellStyle::Quiz => "bg-gray-200",
            CellStyle::Doubts => "bg-gray-50",
        }
    }
}

/// Checked in order; first hit wins. "school" deliberately maps to the default.
const KEYWORDS: &[(&str, CellStyle)] = &[
    ("school", CellStyle::Default),
    ("break", CellStyle::Highlighted),
    ("quiz", CellStyle::Quiz),
    ("list the doubts", CellStyle::Doubts),
];

/// Case-insensitive keyword match on the cell text. Absent cells get the default.
pub fn cell_style(content: Option<&str>) -> CellStyle {
    let Some(content) = content else {
        return CellStyle::Default;
    };
    let lower = content.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(CellStyle::Default, |&(_, style)| style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_is_highlighted_regardless_of_case() {
        for text in ["Break", "BREAK", "short break", "Lunch BrEaK 13:00"] {
            assert_eq!(cell_style(Some(text)), CellStyle::Highlighted, "{text}");
        }
        assert_eq!(CellStyle::Highlighted.class(), "bg-yellow-100");
    }

    #[test]
    fn test_quiz_and_doubts_get_alternate_shades() {
        assert_eq!(cell_style(Some("Weekly Quiz")), CellStyle::Quiz);
        assert_eq!(cell_style(Some("List the doubts for Monday")), CellStyle::Doubts);
        assert_eq!(CellStyle::Quiz.class(), "bg-gray-200");
        assert_eq!(CellStyle::Doubts.class(), "bg-gray-50");
    }

    #[test]
    fn test_school_takes_precedence_over_break() {
        assert_eq!(cell_style(Some("School (break at 11)")), CellStyle::Default);
    }

    #[test]
    fn test_plain_and_absent_cells_are_default() {
        assert_eq!(cell_style(Some("Physics: Laws of Motion")), CellStyle::Default);
        assert_eq!(cell_style(Some("")), CellStyle::Default);
        assert_eq!(cell_style(None), CellStyle::Default);
        assert_eq!(CellStyle::Default.class(), "bg-white");
    }
}
