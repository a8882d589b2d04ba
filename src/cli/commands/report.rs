//! Report command handler

use gradecard::config::Config;
use gradecard::core::marksheet::parse_marksheet_csv;
use gradecard::core::models::Semester;
use gradecard::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator, SemesterSummary,
};
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command for a single marksheet file.
pub fn run(input_file: &Path, output_file: Option<&Path>, format: &str, config: &Config) {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);

    let result = if let Some(output) = output_file {
        parse_format(format)
            .and_then(|report_format| generate(input_file, output, report_format))
            .map(|()| output.to_path_buf())
    } else {
        if let Err(e) = std::fs::create_dir_all(&reports_dir) {
            eprintln!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            );
            return;
        }
        generate_from_marksheet(input_file, &reports_dir, format)
    };

    match result {
        Ok(report_path) => println!("✓ Report written: {}", report_path.display()),
        Err(e) => eprintln!("{e}"),
    }
}

/// Generate a report into the reports directory, deriving the output file
/// name from the input file stem. Returns the report path.
///
/// # Errors
/// Returns a display-ready message if parsing, rendering, or writing fails.
pub fn generate_from_marksheet(
    input_file: &Path,
    reports_dir: &Path,
    format: &str,
) -> Result<PathBuf, String> {
    let report_format = parse_format(format)?;
    let output_path = report_path_for(input_file, reports_dir, report_format);
    generate(input_file, &output_path, report_format)?;
    Ok(output_path)
}

/// Default report path for an input file: `{stem}_report.{ext}` under the
/// reports directory
#[must_use]
pub fn report_path_for(
    input_file: &Path,
    reports_dir: &Path,
    report_format: ReportFormat,
) -> PathBuf {
    let filename = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("semester");
    reports_dir.join(format!("{filename}_report.{}", report_format.extension()))
}

/// Parse a format argument into a [`ReportFormat`]
///
/// # Errors
/// Returns a display-ready message for unknown formats.
pub fn parse_format(format: &str) -> Result<ReportFormat, String> {
    format
        .parse()
        .map_err(|e| format!("✗ {e} (expected markdown or html)"))
}

/// Render a computed semester and write the report to `output_path`.
///
/// # Errors
/// Returns a display-ready message if writing fails.
pub fn write_report(
    semester: &Semester,
    output_path: &Path,
    report_format: ReportFormat,
) -> Result<(), String> {
    let summary = SemesterSummary::from_semester(semester);
    let ctx = ReportContext::new(semester, &summary);

    let reporter: Box<dyn ReportGenerator> = match report_format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    reporter.generate(&ctx, output_path).map_err(|e| {
        format!(
            "✗ Failed to write report to {}: {e}",
            output_path.display()
        )
    })?;

    info!("Report written: {}", output_path.display());
    Ok(())
}

/// Parse and compute a marksheet, then render a report to an explicit path.
fn generate(
    input_file: &Path,
    output_path: &Path,
    report_format: ReportFormat,
) -> Result<(), String> {
    let marksheet = parse_marksheet_csv(input_file).map_err(|e| {
        error!("Failed to load marksheet {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    write_report(&marksheet.compute(), output_path, report_format)
}
