//! Semester model

use super::ComputedCourse;
use crate::core::compute::compute_semester_sgpa;
use serde::{Deserialize, Serialize};

/// A semester's worth of computed course records.
///
/// Holds no derived state of its own: the SGPA is recomputed from the
/// course list whenever it is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester number (1-based)
    pub number: u32,

    /// Academic year label (e.g., "2024-2025")
    pub academic_year: String,

    /// Computed course records for the semester
    pub courses: Vec<ComputedCourse>,
}

impl Semester {
    /// Create a new, empty semester
    #[must_use]
    pub fn new(number: u32, academic_year: impl Into<String>) -> Self {
        Self {
            number,
            academic_year: academic_year.into(),
            courses: Vec::new(),
        }
    }

    /// Add a computed course record
    pub fn add_course(&mut self, course: ComputedCourse) {
        self.courses.push(course);
    }

    /// Credit-weighted semester grade point average, two decimals.
    /// Zero total credits (including an empty semester) yields 0.0.
    #[must_use]
    pub fn sgpa(&self) -> f64 {
        compute_semester_sgpa(&self.courses)
    }

    /// Sum of credits across all courses (missing credits count as zero)
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(ComputedCourse::credits_or_zero).sum()
    }

    /// Number of courses in the semester
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute::compute_course_fields;
    use crate::core::models::Course;

    #[test]
    fn empty_semester_has_zero_sgpa() {
        let semester = Semester::new(1, "2024-2025");
        assert!((semester.sgpa()).abs() < f64::EPSILON);
        assert!((semester.total_credits()).abs() < f64::EPSILON);
        assert_eq!(semester.course_count(), 0);
    }

    #[test]
    fn sgpa_recomputes_from_course_list() {
        let mut semester = Semester::new(1, "2024-2025");

        let mut course = Course::new("CS101", "Data Structures");
        course.set_internal_assessments(15.0, 14.0, 13.0);
        course.lab = Some(25.0);
        course.other = Some(25.0);
        course.external = Some(45.0);
        course.credits = Some(4.0);

        semester.add_course(compute_course_fields(&course));

        // One S-grade course: SGPA equals its grade points.
        assert!((semester.sgpa() - 10.0).abs() < f64::EPSILON);
        assert!((semester.total_credits() - 4.0).abs() < f64::EPSILON);
    }
}
