//! Computed course model

use super::Course;
use crate::core::grading::LetterGrade;
use serde::{Deserialize, Serialize};

/// A course together with its derived marks.
///
/// Produced only by [`crate::core::compute::compute_course_fields`]; the
/// derived fields are never mutated independently. If the raw marks change,
/// a fresh record replaces this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedCourse {
    /// The raw course record the derived fields were computed from
    pub course: Course,

    /// Weighted internal total, 0-50, two decimals
    pub total_internal: f64,

    /// Internal total plus external, 0-100, two decimals
    pub total: f64,

    /// Letter grade classified from `total`
    pub letter_grade: LetterGrade,

    /// Grade points (0-10), the SGPA weight
    pub grade_points: u8,
}

impl ComputedCourse {
    /// Credits coerced to a number (missing credits count as zero)
    #[must_use]
    pub fn credits_or_zero(&self) -> f64 {
        crate::core::numeric::number_or_zero(self.course.credits)
    }
}
