//! Raw course validation.
//!
//! The validator is advisory: it reports every violation at once and never
//! blocks computation itself. Callers decide whether to refuse invalid
//! data. All checks run unconditionally, each appending its own message, so
//! one bad field never hides another.

use crate::core::models::Course;

/// Outcome of validating a raw course.
///
/// `errors` preserves check order. Produced fresh per call; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True when no check produced an error
    pub valid: bool,
    /// Human-readable violation messages, in check order
    pub errors: Vec<String>,
}

/// True when the mark is absent or inside the inclusive range.
///
/// A missing mark passes every range check by policy: range checks apply
/// to entered values only, and the required-field checks cover absence
/// where it matters. The validator performs no numeric coercion.
fn in_range(value: Option<f64>, min: f64, max: f64) -> bool {
    value.is_none_or(|v| (min..=max).contains(&v))
}

/// Validate a raw course against the declared mark ranges and required
/// fields.
///
/// Checks run in a fixed order with no short-circuiting: course code and
/// name present; attendance in [0,100]; each IA in [0,15]; lab and other
/// in [0,25]; external in [0,50]; credits in [0,10]. Bounds are inclusive
/// on both ends.
#[must_use]
pub fn validate_course(course: &Course) -> ValidationResult {
    let mut errors = Vec::new();

    if course.course_code.is_empty() {
        errors.push("Course code is required".to_string());
    }
    if course.course_name.is_empty() {
        errors.push("Course name is required".to_string());
    }

    if !in_range(course.attendance_percentage, 0.0, 100.0) {
        errors.push("Attendance must be between 0 and 100".to_string());
    }

    for (name, value) in [("ia1", course.ia1), ("ia2", course.ia2), ("ia3", course.ia3)] {
        if !in_range(value, 0.0, 15.0) {
            errors.push(format!(
                "{} must be between 0 and 15",
                name.to_uppercase()
            ));
        }
    }

    for (name, value) in [("lab", course.lab), ("other", course.other)] {
        if !in_range(value, 0.0, 25.0) {
            errors.push(format!("{name} must be between 0 and 25"));
        }
    }

    if !in_range(course.external, 0.0, 50.0) {
        errors.push("External marks must be between 0 and 50".to_string());
    }

    if !in_range(course.credits, 0.0, 10.0) {
        errors.push("Credits must be between 0 and 10".to_string());
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
