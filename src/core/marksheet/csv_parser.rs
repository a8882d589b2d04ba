//! CSV parser for marksheet data
//!
//! The expected layout is a metadata section, a `Courses` marker line, a
//! header row, then one course per row:
//!
//! ```text
//! Semester,1
//! Academic Year,2024-2025
//! Courses
//! Course Code,Course Name,Attendance,IA1,IA2,IA3,Lab,Other,External,Credits
//! CS101,Data Structures,85,14,13,15,23,22,45,4
//! ```
//!
//! Empty or unparsable numeric cells are treated as missing marks, which
//! the computation engine later coerces to zero.

use super::Marksheet;
use crate::core::models::Course;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a marksheet CSV file.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// A `Marksheet` with semester metadata and raw course records in file order
///
/// # Errors
/// Returns an error if the file cannot be read, the `Courses` section is
/// missing, or no header row follows it.
pub fn parse_marksheet_csv<P: AsRef<Path>>(path: P) -> Result<Marksheet, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_marksheet_str(&content)
}

/// Parse marksheet CSV content from a string.
///
/// # Errors
/// Same conditions as [`parse_marksheet_csv`], minus file I/O.
pub fn parse_marksheet_str(content: &str) -> Result<Marksheet, Box<dyn Error>> {
    let lines: Vec<&str> = content.lines().collect();

    let courses_start = lines
        .iter()
        .position(|line| is_courses_marker(line))
        .ok_or("No 'Courses' section found in CSV")?;

    let mut marksheet = parse_metadata(&lines[..courses_start]);

    if courses_start + 1 >= lines.len() {
        return Err("No course header found".into());
    }

    let headers = parse_csv_line(lines[courses_start + 1]);

    for line in lines.iter().skip(courses_start + 2) {
        if line.trim().is_empty() {
            continue;
        }
        marksheet.courses.push(parse_course_line(line, &headers));
    }

    Ok(marksheet)
}

/// True for the line that separates metadata from the course table
fn is_courses_marker(line: &str) -> bool {
    line.trim()
        .trim_end_matches(',')
        .eq_ignore_ascii_case("courses")
}

/// Parse the metadata section (everything before the `Courses` marker).
///
/// Unknown keys are ignored; a missing semester defaults to 1 and a missing
/// academic year to an empty label.
fn parse_metadata(lines: &[&str]) -> Marksheet {
    let mut marksheet = Marksheet::new(1, "");

    for line in lines {
        let fields = parse_csv_line(line);
        if fields.len() < 2 {
            continue;
        }

        match fields[0].to_lowercase().as_str() {
            "semester" => {
                if let Ok(number) = fields[1].parse::<u32>() {
                    marksheet.semester = number;
                }
            }
            "academic year" => {
                marksheet.academic_year = fields[1].clone();
            }
            _ => {}
        }
    }

    marksheet
}

/// Parse a single course row into a raw course record
fn parse_course_line(line: &str, headers: &[String]) -> Course {
    let fields = parse_csv_line(line);

    let mut course = Course::new(
        get_field(&fields, "Course Code", headers).unwrap_or_default(),
        get_field(&fields, "Course Name", headers).unwrap_or_default(),
    );

    course.attendance_percentage = get_number(&fields, "Attendance", headers);
    course.ia1 = get_number(&fields, "IA1", headers);
    course.ia2 = get_number(&fields, "IA2", headers);
    course.ia3 = get_number(&fields, "IA3", headers);
    course.lab = get_number(&fields, "Lab", headers);
    course.other = get_number(&fields, "Other", headers);
    course.external = get_number(&fields, "External", headers);
    course.credits = get_number(&fields, "Credits", headers);

    course
}

/// Split a CSV line into trimmed fields.
///
/// Fields may be wrapped in double quotes; commas inside quotes are field
/// content, and a doubled quote inside a quoted field is a literal quote.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());

    fields
}

/// Get a field value by header name (case-insensitive)
fn get_field(fields: &[String], header_name: &str, headers: &[String]) -> Option<String> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .cloned()
}

/// Get a numeric field by header name; empty or unparsable cells are `None`
fn get_number(fields: &[String], header_name: &str, headers: &[String]) -> Option<f64> {
    get_field(fields, header_name, headers).and_then(|raw| raw.parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Semester,1
Academic Year,2024-2025
Courses
Course Code,Course Name,Attendance,IA1,IA2,IA3,Lab,Other,External,Credits
CS101,Data Structures,85,15,14,13,25,25,45,4
CS102,Algorithms,90,14,13,12,23,22,42,4
";

    #[test]
    fn parses_metadata_and_courses() {
        let sheet = parse_marksheet_str(SAMPLE).expect("parse sample");

        assert_eq!(sheet.semester, 1);
        assert_eq!(sheet.academic_year, "2024-2025");
        assert_eq!(sheet.courses.len(), 2);

        let first = &sheet.courses[0];
        assert_eq!(first.course_code, "CS101");
        assert_eq!(first.course_name, "Data Structures");
        assert_eq!(first.attendance_percentage, Some(85.0));
        assert_eq!(first.ia1, Some(15.0));
        assert_eq!(first.external, Some(45.0));
        assert_eq!(first.credits, Some(4.0));
    }

    #[test]
    fn empty_cells_become_missing_marks() {
        let content = "\
Semester,2
Academic Year,2024-2025
Courses
Course Code,Course Name,Attendance,IA1,IA2,IA3,Lab,Other,External,Credits
CS201,Operating Systems,,12,,10,20,,40,3
";
        let sheet = parse_marksheet_str(content).expect("parse");
        let course = &sheet.courses[0];

        assert!(course.attendance_percentage.is_none());
        assert_eq!(course.ia1, Some(12.0));
        assert!(course.ia2.is_none());
        assert!(course.other.is_none());
    }

    #[test]
    fn unparsable_numbers_become_missing_marks() {
        let content = "\
Courses
Course Code,Course Name,IA1,Credits
CS101,Data Structures,abc,4
";
        let sheet = parse_marksheet_str(content).expect("parse");
        assert!(sheet.courses[0].ia1.is_none());
        assert_eq!(sheet.courses[0].credits, Some(4.0));
    }

    #[test]
    fn missing_courses_section_is_an_error() {
        let content = "Semester,1\nAcademic Year,2024-2025\n";
        assert!(parse_marksheet_str(content).is_err());
    }

    #[test]
    fn missing_header_row_is_an_error() {
        let content = "Semester,1\nCourses\n";
        assert!(parse_marksheet_str(content).is_err());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let content = "\
Semester,1
Academic Year,2024-2025
Courses
Course Code,Course Name,IA1,Credits

CS101,Data Structures,14,4

";
        let sheet = parse_marksheet_str(content).expect("parse");
        assert_eq!(sheet.courses.len(), 1);
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let content = "\
Semester,1
Academic Year,2024-2025
Courses
Course Code,Course Name,Attendance,IA1,IA2,IA3,Lab,Other,External,Credits
CS103,\"Logic, Sets and Functions\",80,14,12,13,20,21,40,4
";
        let sheet = parse_marksheet_str(content).expect("parse");
        let course = &sheet.courses[0];

        assert_eq!(course.course_code, "CS103");
        assert_eq!(course.course_name, "Logic, Sets and Functions");
        // Columns after the quoted field must not shift.
        assert_eq!(course.attendance_percentage, Some(80.0));
        assert_eq!(course.ia1, Some(14.0));
        assert_eq!(course.credits, Some(4.0));
    }

    #[test]
    fn doubled_quotes_become_literal_quotes() {
        let content = "\
Courses
Course Code,Course Name,IA1
CS104,\"The \"\"Capstone\"\" Project\",12
";
        let sheet = parse_marksheet_str(content).expect("parse");
        assert_eq!(sheet.courses[0].course_name, "The \"Capstone\" Project");
        assert_eq!(sheet.courses[0].ia1, Some(12.0));
    }

    #[test]
    fn metadata_defaults_apply_when_absent() {
        let content = "\
Courses
Course Code,Course Name,IA1
CS101,Data Structures,14
";
        let sheet = parse_marksheet_str(content).expect("parse");
        assert_eq!(sheet.semester, 1);
        assert_eq!(sheet.academic_year, "");
    }
}
