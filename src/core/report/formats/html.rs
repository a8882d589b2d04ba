//! HTML report generator
//!
//! Renders a self-contained HTML marks card with embedded CSS.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[must_use]
    pub fn render(ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{title}}", &escape(&ctx.title()));
        output = output.replace("{{sgpa}}", &format!("{:.2}", ctx.summary.sgpa));
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.summary.total_credits),
        );
        output = output.replace("{{course_count}}", &ctx.summary.course_count.to_string());

        output = output.replace("{{best_course}}", &course_label(&ctx.summary.best_course));
        output = output.replace("{{best_total}}", &format!("{:.2}", ctx.summary.best_total));
        output = output.replace(
            "{{weakest_course}}",
            &course_label(&ctx.summary.weakest_course),
        );
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

        table.push_str("<table>\n<tr><th>Code</th><th>Course</th><th>Internal</th><th>External</th><th>Total</th><th>Grade</th><th>Points</th><th>Credits</th></tr>\n");

        for computed in &ctx.semester.courses {
            let course = &computed.course;
            let _ = writeln!(
                table,
                "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
                escape(&course.course_code),
                escape(&course.course_name),
                computed.total_internal,
                crate::core::numeric::number_or_zero(course.external),
                computed.total,
                computed.letter_grade,
                computed.grade_points,
                computed.credits_or_zero(),
            );
        }

        table.push_str("</table>");
        table
    }

    /// Generate the grade distribution table
    fn distribution_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("<table>\n<tr><th>Grade</th><th>Courses</th></tr>\n");
        for (grade, count) in &ctx.summary.grade_counts {
            let _ = writeln!(table, "<tr><td>{grade}</td><td>{count}</td></tr>");
        }
        table.push_str("</table>");
        table
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, Self::render(ctx))?;
        Ok(())
    }
}

/// Escaped course code for a summary cell, or "N/A" when there are no courses
fn course_label(course_code: &str) -> String {
    if course_code.is_empty() {
        "N/A".to_string()
    } else {
        escape(course_code)
    }
}

/// Minimal HTML escaping for text content
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
