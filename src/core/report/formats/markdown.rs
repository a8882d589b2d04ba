//! Markdown report generator
//!
//! Renders a semester marks card in Markdown. The output displays well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[must_use]
    pub fn render(ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", &ctx.title());
        output = output.replace("{{sgpa}}", &format!("{:.2}", ctx.summary.sgpa));
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.summary.total_credits),
        );
        output = output.replace("{{course_count}}", &ctx.summary.course_count.to_string());
        output = output.replace("{{best_course}}", or_na(&ctx.summary.best_course));
        output = output.replace("{{best_total}}", &format!("{:.2}", ctx.summary.best_total));
        output = output.replace("{{weakest_course}}", or_na(&ctx.summary.weakest_course));
        output = output.replace(
            "{{weakest_total}}",
            &format!("{:.2}", ctx.summary.weakest_total),
        );

        output = output.replace("{{course_table}}", &Self::course_table(ctx));
        output = output.replace("{{grade_distribution}}", &Self::distribution_table(ctx));

        output
    }

    /// Generate the per-course marks table
    fn course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Code | Course | Internal | External | Total | Grade | Points | Credits |\n");
        table.push_str("|---|---|---|---|---|---|---|---|\n");

        for computed in &ctx.semester.courses {
            let course = &computed.course;
            let _ = writeln!(
                table,
                "| {} | {} | {:.2} | {:.2} | {:.2} | {} | {} | {:.1} |",
                course.course_code,
                course.course_name,
                computed.total_internal,
                crate::core::numeric::number_or_zero(course.external),
                computed.total,
                computed.letter_grade,
                computed.grade_points,
                computed.credits_or_zero(),
            );
        }

        table
    }

    /// Generate the grade distribution table
    fn distribution_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Grade | Courses |\n");
        table.push_str("|---|---|\n");

        for (grade, count) in &ctx.summary.grade_counts {
            let _ = writeln!(table, "| {grade} | {count} |");
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, Self::render(ctx))?;
        Ok(())
    }
}

/// Substitute "N/A" for an empty course code
fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute::compute_course_fields;
    use crate::core::models::{Course, Semester};
    use crate::core::report::SemesterSummary;

    fn render_sample() -> String {
        let mut semester = Semester::new(1, "2024-2025");

        let mut course = Course::new("CS101", "Data Structures");
        course.set_internal_assessments(15.0, 14.0, 13.0);
        course.lab = Some(25.0);
        course.other = Some(25.0);
        course.external = Some(45.0);
        course.credits = Some(4.0);
        semester.add_course(compute_course_fields(&course));

        let summary = SemesterSummary::from_semester(&semester);
        MarkdownReporter::render(&ReportContext::new(&semester, &summary))
    }

    #[test]
    fn renders_summary_and_course_rows() {
        let output = render_sample();

        assert!(output.contains("# Semester 1 (2024-2025) - Marks Report"));
        assert!(output.contains("| SGPA | **10.00** |"));
        assert!(output.contains("| CS101 | Data Structures | 49.33 | 45.00 | 94.33 | S | 10 | 4.0 |"));
    }

    #[test]
    fn leaves_no_placeholders_behind() {
        let output = render_sample();
        assert!(!output.contains("{{"));
        assert!(!output.contains("}}"));
    }

    #[test]
    fn empty_semester_reports_na() {
        let semester = Semester::new(2, "");
        let summary = SemesterSummary::from_semester(&semester);
        let output = MarkdownReporter::render(&ReportContext::new(&semester, &summary));

        assert!(output.contains("# Semester 2 - Marks Report"));
        assert!(output.contains("| Best Course | N/A (0.00) |"));
    }
}
