//! Export computed semester marks to other formats

use crate::core::models::{ComputedCourse, Semester};
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Trait for exporting a computed semester in different formats
pub trait MarksExporter {
    /// Export a computed semester to the given path
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(&self, semester: &Semester, output_path: &Path) -> Result<(), Box<dyn Error>>;
}

/// CSV exporter: raw columns plus computed totals, grade, and a trailing
/// SGPA summary row.
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CSV exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the semester as CSV text
    #[must_use]
    pub fn render(semester: &Semester) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Semester,{}", semester.number);
        let _ = writeln!(out, "Academic Year,{}", semester.academic_year);
        out.push_str("Courses\n");
        out.push_str(
            "Course Code,Course Name,Attendance,IA1,IA2,IA3,Lab,Other,External,Credits,\
             Total Internal,Total,Grade,Grade Points\n",
        );

        for computed in &semester.courses {
            out.push_str(&Self::course_row(computed));
            out.push('\n');
        }

        let _ = writeln!(out, "SGPA,{:.2}", semester.sgpa());
        out
    }

    fn course_row(computed: &ComputedCourse) -> String {
        let course = &computed.course;
        format!(
            "{},{},{},{},{},{},{},{},{},{},{:.2},{:.2},{},{}",
            text_cell(&course.course_code),
            text_cell(&course.course_name),
            cell(course.attendance_percentage),
            cell(course.ia1),
            cell(course.ia2),
            cell(course.ia3),
            cell(course.lab),
            cell(course.other),
            cell(course.external),
            cell(course.credits),
            computed.total_internal,
            computed.total,
            computed.letter_grade,
            computed.grade_points,
        )
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarksExporter for CsvExporter {
    fn export(&self, semester: &Semester, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, Self::render(semester))?;
        Ok(())
    }
}

/// Quote a text cell when it contains a comma or a quote, doubling any
/// embedded quotes, so the row parses back into the same fields
fn text_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Format an optional mark for a CSV cell; missing marks stay empty
fn cell(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| {
        if (v - v.trunc()).abs() < f64::EPSILON {
            format!("{v:.0}")
        } else {
            format!("{v}")
        }
    })
}
