use colored::*;
use crate::core::data::Student;
use std::io::{self, Write};

/// Table headers in display order
pub const STUDENT_HEADERS: [&str; 6] = [
    "StudentId",
    "FirstName",
    "LastName",
    "GPA",
    "Major",
    "FacultyAdvisor",
];

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    /// Turn styling on or off for the whole process
    pub fn apply_color_preference(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }
}

/// Shown instead of a table when a search finds nothing
pub const NO_STUDENTS: &str = "There are no such students in the database";

/// Display formatter for search results
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Print students as a table, or a notice when there are none
    pub fn print_students(students: &[Student]) -> io::Result<()> {
        Self::write_students(&mut io::stdout().lock(), students)
    }

    pub fn write_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
        if students.is_empty() {
            writeln!(out, "{}", OutputStyle::muted(NO_STUDENTS))?;
            return Ok(());
        }

        writeln!(out, "🎓 {} ({} found)",
                 OutputStyle::header("Students"),
                 OutputStyle::info(&students.len().to_string())
        )?;
        for line in Self::render_table(students) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Render a bordered table with one row per student.
    ///
    /// Widths are measured in chars so accented names stay aligned.
    pub fn render_table(students: &[Student]) -> Vec<String> {
        let rows: Vec<[String; 6]> = students.iter().map(Self::row_cells).collect();

        let mut widths = STUDENT_HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(mid), right)
        };

        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(border("┌", "┬", "┐"));
        lines.push(Self::format_row(&STUDENT_HEADERS.map(String::from), &widths));
        lines.push(border("├", "┼", "┤"));
        for row in &rows {
            lines.push(Self::format_row(row, &widths));
        }
        lines.push(border("└", "┴", "┘"));
        lines
    }

    fn row_cells(student: &Student) -> [String; 6] {
        [
            student.id.to_string(),
            student.first_name.clone(),
            student.last_name.clone(),
            format!("{:.2}", student.gpa),
            student.major.clone(),
            student.advisor.clone(),
        ]
    }

    fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!(" {}{} ", cell, " ".repeat(pad))
            })
            .collect();
        format!("│{}│", padded.join("│"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(students: &[Student]) -> String {
        let mut out = Vec::new();
        DisplayFormatter::write_students(&mut out, students).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_result_prints_notice_instead_of_table() {
        let text = written(&[]);
        assert!(text.contains(NO_STUDENTS));
        assert!(!text.contains("StudentId"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_results_print_count_and_table() {
        let text = written(&[Student::new(1, "Ann", "Lee", 3.5, "CS", "Smith")]);
        assert!(!text.contains(NO_STUDENTS));
        assert!(text.contains("StudentId"));
        assert!(text.contains("Smith"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_render_table_column_order() {
        let students = vec![Student::new(1, "Ann", "Lee", 3.5, "CS", "Smith")];
        let lines = DisplayFormatter::render_table(&students);

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[1],
            "│ StudentId │ FirstName │ LastName │ GPA  │ Major │ FacultyAdvisor │"
        );
        assert_eq!(
            lines[3],
            "│ 1         │ Ann       │ Lee      │ 3.50 │ CS    │ Smith          │"
        );
    }

    #[test]
    fn test_render_table_widens_for_long_values() {
        let students = vec![
            Student::new(1, "Ann", "Lee", 3.5, "CS", "Smith"),
            Student::new(2, "Bob", "Ray", 2.0, "Mathematics", "Rene German-Johannsen"),
        ];
        let lines = DisplayFormatter::render_table(&students);

        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(lines[4].contains("Rene German-Johannsen"));
    }

    #[test]
    fn test_render_table_counts_chars_not_bytes() {
        let students = vec![Student::new(3, "Zoë", "Müller", 3.9, "Art", "Ångström")];
        let lines = DisplayFormatter::render_table(&students);

        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
