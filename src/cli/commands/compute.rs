//! Compute command handler

use crate::commands::report;
use gradecard::config::Config;
use gradecard::core::export::{CsvExporter, MarksExporter};
use gradecard::core::marksheet::parse_marksheet_csv;
use gradecard::core::models::Semester;
use gradecard::core::report::ReportFormat;
use logger::{error, info, warn};
use std::path::{Path, PathBuf};

/// Output options for the compute command
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeOptions {
    /// Show per-course output
    pub verbose: bool,
    /// Compute even when validation reports errors
    pub force: bool,
    /// Skip computed-CSV export
    pub no_csv: bool,
}

/// Run the compute command for one or more marksheet files.
///
/// Every file is validated first; files with violations are skipped
/// entirely (no CSV, no report) unless `force` is set.
///
/// # Arguments
/// * `input_files` - Paths to marksheet CSV files
/// * `output_files` - Optional output paths; must match inputs 1:1 when provided
/// * `report_format` - Generate a report per input in this format when given
/// * `config` - Configuration containing the default output directories
/// * `options` - Verbose/force/no-csv flags
pub fn run(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    report_format: Option<&str>,
    config: &Config,
    options: ComputeOptions,
) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return;
    }

    let report_format = match report_format.map(report::parse_format).transpose() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if report_format.is_some() {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        if let Err(e) = std::fs::create_dir_all(&reports_dir) {
            eprintln!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            );
            return;
        }
    }

    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = process_single(input_file, output_file, report_format, config, options) {
            error!("Compute failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

/// Validate, compute, and export one marksheet. The validation gate fronts
/// every output: an invalid file produces neither a CSV nor a report unless
/// forced.
fn process_single(
    input_file: &Path,
    output_file: Option<&Path>,
    report_format: Option<ReportFormat>,
    config: &Config,
    options: ComputeOptions,
) -> Result<(), String> {
    let marksheet = parse_marksheet_csv(input_file).map_err(|e| {
        error!("Failed to load marksheet {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    if options.verbose {
        println!(
            "✓ Marksheet loaded successfully from: {}",
            input_file.display()
        );
    } else {
        info!("Marksheet loaded: {}", input_file.display());
    }

    // Validation is advisory: report every violation, then let --force decide.
    let mut violation_count = 0usize;
    for (course, result) in marksheet.courses.iter().zip(marksheet.validate()) {
        for message in &result.errors {
            violation_count += 1;
            let label = if course.course_code.is_empty() {
                "<no code>"
            } else {
                &course.course_code
            };
            eprintln!("✗ {label}: {message}");
        }
    }

    if violation_count > 0 {
        warn!(
            "{violation_count} validation error(s) in {}",
            input_file.display()
        );
        if !options.force {
            return Err(format!(
                "✗ {} has {violation_count} validation error(s); fix them or re-run with --force",
                input_file.display()
            ));
        }
    }

    let semester = marksheet.compute();

    if options.verbose {
        for computed in &semester.courses {
            println!(
                "  {} {}: internal {:.2}, total {:.2}, grade {} ({})",
                computed.course.course_code,
                computed.course.course_name,
                computed.total_internal,
                computed.total,
                computed.letter_grade,
                computed.grade_points,
            );
        }
    }

    if !options.no_csv {
        export_csv(&semester, input_file, output_file, config)?;
    }

    if let Some(format) = report_format {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        let report_path = report::report_path_for(input_file, &reports_dir, format);
        report::write_report(&semester, &report_path, format)?;
        println!("✓ Report generated: {}", report_path.display());
    }

    Ok(())
}

/// Write the computed CSV, defaulting the output path to
/// `{marks_dir}/{stem}_computed.csv`
fn export_csv(
    semester: &Semester,
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let marks_dir = PathBuf::from(&config.paths.marks_dir);
        std::fs::create_dir_all(&marks_dir).map_err(|e| {
            format!(
                "✗ Failed to create output directory {}: {e}",
                marks_dir.display()
            )
        })?;

        let filename = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("semester");
        marks_dir.join(format!("{filename}_computed.csv"))
    };

    CsvExporter::new()
        .export(semester, &final_output_path)
        .map_err(|e| {
            format!(
                "✗ Failed to write computed marks to {}: {e}",
                final_output_path.display()
            )
        })?;

    println!(
        "✓ Computed marks written: {} (SGPA {:.2})",
        final_output_path.display(),
        semester.sgpa()
    );

    Ok(())
}
