//! Marksheet input handling.
//!
//! A marksheet is one semester's raw marks as entered: semester metadata
//! plus one raw course record per row. This module owns the CSV input
//! boundary and the raw-to-computed pipeline step.

pub mod csv_parser;

pub use csv_parser::parse_marksheet_csv;

use crate::core::compute::compute_course_fields;
use crate::core::models::{Course, Semester};
use crate::core::validation::{validate_course, ValidationResult};

/// A parsed marksheet: semester metadata and raw course records.
#[derive(Debug, Clone, PartialEq)]
pub struct Marksheet {
    /// Semester number (1-based)
    pub semester: u32,
    /// Academic year label (e.g., "2024-2025")
    pub academic_year: String,
    /// Raw course records in file order
    pub courses: Vec<Course>,
}

impl Marksheet {
    /// Create an empty marksheet
    #[must_use]
    pub fn new(semester: u32, academic_year: impl Into<String>) -> Self {
        Self {
            semester,
            academic_year: academic_year.into(),
            courses: Vec::new(),
        }
    }

    /// Validate every course, in file order.
    ///
    /// Returns one result per course; validation is advisory and does not
    /// stop [`Self::compute`] from running.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationResult> {
        self.courses.iter().map(validate_course).collect()
    }

    /// True when every course passes validation
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().iter().all(|r| r.valid)
    }

    /// Compute derived fields for every course, producing a semester.
    #[must_use]
    pub fn compute(&self) -> Semester {
        let mut semester = Semester::new(self.semester, self.academic_year.clone());
        for course in &self.courses {
            semester.add_course(compute_course_fields(course));
        }
        semester
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_preserves_course_order() {
        let mut sheet = Marksheet::new(1, "2024-2025");
        sheet.courses.push(Course::new("CS101", "Data Structures"));
        sheet.courses.push(Course::new("CS102", "Algorithms"));

        let semester = sheet.compute();
        assert_eq!(semester.course_count(), 2);
        assert_eq!(semester.courses[0].course.course_code, "CS101");
        assert_eq!(semester.courses[1].course.course_code, "CS102");
    }

    #[test]
    fn validation_is_advisory() {
        let mut sheet = Marksheet::new(1, "2024-2025");
        let mut bad = Course::new("CS101", "Data Structures");
        bad.ia1 = Some(99.0);
        sheet.courses.push(bad);

        assert!(!sheet.is_valid());
        // Computation still runs and still returns a number.
        let semester = sheet.compute();
        assert!(semester.courses[0].total_internal > 50.0);
    }
}
