//! Raw course model

use serde::{Deserialize, Serialize};

/// A course's raw marks as entered, before any computation.
///
/// Every numeric field is optional: a mark that was never entered (or could
/// not be read as a number) is `None`, and the computation engine coerces it
/// to zero at its entry points. The validator, by contrast, never coerces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Short course identifier (e.g., "CS101")
    pub course_code: String,

    /// Full course name (e.g., "Data Structures")
    pub course_name: String,

    /// Attendance percentage, 0-100
    #[serde(default)]
    pub attendance_percentage: Option<f64>,

    /// First internal-assessment score, 0-15
    #[serde(default)]
    pub ia1: Option<f64>,

    /// Second internal-assessment score, 0-15
    #[serde(default)]
    pub ia2: Option<f64>,

    /// Third internal-assessment score, 0-15
    #[serde(default)]
    pub ia3: Option<f64>,

    /// Lab component score, 0-25
    #[serde(default)]
    pub lab: Option<f64>,

    /// Second internal component (assignments/quizzes), 0-25
    #[serde(default)]
    pub other: Option<f64>,

    /// End-semester exam score, 0-50
    #[serde(default)]
    pub external: Option<f64>,

    /// Credit hours, 0-10
    #[serde(default)]
    pub credits: Option<f64>,
}

impl Course {
    /// Create a new course with no marks entered
    ///
    /// # Arguments
    /// * `course_code` - Short identifier (e.g., "CS101")
    /// * `course_name` - Full course name
    #[must_use]
    pub fn new(course_code: impl Into<String>, course_name: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: course_name.into(),
            ..Self::default()
        }
    }

    /// Set the three internal-assessment scores at once
    pub fn set_internal_assessments(&mut self, ia1: f64, ia2: f64, ia3: f64) {
        self.ia1 = Some(ia1);
        self.ia2 = Some(ia2);
        self.ia3 = Some(ia3);
    }
}
