//! Internal-mark aggregation.
//!
//! Combines the best two of three internal-assessment scores with the lab
//! and "other" component scores into a single weighted total out of 50:
//! best-two IAs rescaled from 30 to 20 points, lab and other each rescaled
//! from 25 to 15 points.

use crate::core::models::Course;
use crate::core::numeric::{number_or_zero, round2};
use std::cmp::Ordering;

/// Sum of the two largest internal-assessment scores.
///
/// Ties are broken arbitrarily by the sort; equal values make the choice
/// numerically irrelevant.
#[must_use]
pub fn best_two_sum(ia1: f64, ia2: f64, ia3: f64) -> f64 {
    let mut marks = [ia1, ia2, ia3];
    marks.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    marks[0] + marks[1]
}

/// Compute the weighted internal total for a course, two decimals.
///
/// Missing or non-numeric marks count as zero. Inputs above their nominal
/// caps are NOT clamped; an IA of 20 inflates the result. Range enforcement
/// is the validator's job and runs before this in a correct pipeline.
#[must_use]
pub fn compute_total_internal(course: &Course) -> f64 {
    let ia1 = number_or_zero(course.ia1);
    let ia2 = number_or_zero(course.ia2);
    let ia3 = number_or_zero(course.ia3);
    let lab = number_or_zero(course.lab);
    let other = number_or_zero(course.other);

    let ia_contribution = best_two_sum(ia1, ia2, ia3) / 30.0 * 20.0;
    let lab_contribution = lab / 25.0 * 15.0;
    let other_contribution = other / 25.0 * 15.0;

    round2(ia_contribution + lab_contribution + other_contribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with_marks(ia1: f64, ia2: f64, ia3: f64, lab: f64, other: f64) -> Course {
        let mut course = Course::new("CS101", "Data Structures");
        course.set_internal_assessments(ia1, ia2, ia3);
        course.lab = Some(lab);
        course.other = Some(other);
        course
    }

    #[test]
    fn best_two_drops_the_lowest() {
        assert!((best_two_sum(15.0, 10.0, 12.0) - 27.0).abs() < f64::EPSILON);
        assert!((best_two_sum(10.0, 12.0, 8.0) - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn best_two_handles_ties() {
        assert!((best_two_sum(12.0, 12.0, 12.0) - 24.0).abs() < f64::EPSILON);
        assert!((best_two_sum(15.0, 15.0, 3.0) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn full_marks_hit_the_cap() {
        // (15+15)/30*20 + 25/25*15 + 25/25*15 = 50.00
        let course = course_with_marks(15.0, 15.0, 15.0, 25.0, 25.0);
        assert!((compute_total_internal(&course) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mixed_marks_use_best_two() {
        // Best 2 IAs: 15 + 12 = 27; (27/30)*20 = 18; +15 +15 = 48.00
        let course = course_with_marks(15.0, 10.0, 12.0, 25.0, 25.0);
        assert!((compute_total_internal(&course) - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_marks_round_to_two_decimals() {
        // Best 2: 12 + 10 = 22; (22/30)*20 = 14.67; +12 +9 = 35.67
        let course = course_with_marks(10.0, 12.0, 8.0, 20.0, 15.0);
        assert!((compute_total_internal(&course) - 35.67).abs() < 0.001);
    }

    #[test]
    fn all_zero_marks_give_zero() {
        let course = course_with_marks(0.0, 0.0, 0.0, 0.0, 0.0);
        assert!((compute_total_internal(&course)).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_marks_count_as_zero() {
        let course = Course::new("CS101", "Data Structures");
        assert!((compute_total_internal(&course)).abs() < f64::EPSILON);
    }

    #[test]
    fn over_cap_inputs_are_not_clamped() {
        // An IA above its 15-point cap inflates the result; the validator,
        // not this function, is responsible for rejecting it.
        let course = course_with_marks(20.0, 20.0, 0.0, 0.0, 0.0);
        // (40/30)*20 = 26.67
        assert!((compute_total_internal(&course) - 26.67).abs() < 0.001);
    }
}
