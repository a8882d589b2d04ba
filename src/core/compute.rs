//! Course-field computation and semester SGPA.
//!
//! `compute_course_fields` turns a raw course into a fully computed record;
//! `compute_semester_sgpa` reduces a list of computed records to one
//! credit-weighted grade point average. Both are pure and never fail for
//! any numeric input.

use crate::core::grading::compute_grade;
use crate::core::internal::compute_total_internal;
use crate::core::models::{ComputedCourse, Course};
use crate::core::numeric::{number_or_zero, round2};

/// Derive all computed fields for a raw course.
///
/// The raw fields are carried over unchanged; `total_internal`, `total`,
/// and the grade fields are derived fresh on every call.
#[must_use]
pub fn compute_course_fields(course: &Course) -> ComputedCourse {
    let total_internal = compute_total_internal(course);
    let external = number_or_zero(course.external);
    let total = round2(total_internal + external);
    let grade = compute_grade(total);

    ComputedCourse {
        course: course.clone(),
        total_internal,
        total,
        letter_grade: grade.letter,
        grade_points: grade.points,
    }
}

/// Credit-weighted SGPA over a semester's computed courses, two decimals.
///
/// Zero total credits (including the empty list) is a defined terminal
/// case, not a failure: the result is 0.0 and no division happens. Input
/// order does not affect the result.
#[must_use]
pub fn compute_semester_sgpa(courses: &[ComputedCourse]) -> f64 {
    let total_credits: f64 = courses.iter().map(ComputedCourse::credits_or_zero).sum();

    if total_credits == 0.0 {
        return 0.0;
    }

    let total_grade_points: f64 = courses
        .iter()
        .map(|c| c.credits_or_zero() * f64::from(c.grade_points))
        .sum();

    round2(total_grade_points / total_credits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grading::LetterGrade;

    fn graded_course(credits: f64, total: f64) -> ComputedCourse {
        let mut course = Course::new("CS101", "Data Structures");
        course.credits = Some(credits);
        // Drive the grade through external marks alone.
        course.external = Some(total);
        compute_course_fields(&course)
    }

    #[test]
    fn computes_all_fields_end_to_end() {
        let mut course = Course::new("CS101", "Data Structures");
        course.set_internal_assessments(15.0, 14.0, 13.0);
        course.lab = Some(25.0);
        course.other = Some(25.0);
        course.external = Some(45.0);

        let computed = compute_course_fields(&course);

        // Best 2: 15+14=29; (29/30)*20 = 19.33; +15 +15 = 49.33
        assert!((computed.total_internal - 49.33).abs() < 0.001);
        assert!((computed.total - 94.33).abs() < 0.001);
        assert_eq!(computed.letter_grade, LetterGrade::S);
        assert_eq!(computed.grade_points, 10);
    }

    #[test]
    fn all_zero_course_is_an_f() {
        let course = Course::new("CS101", "Data Structures");
        let computed = compute_course_fields(&course);

        assert!((computed.total_internal).abs() < f64::EPSILON);
        assert!((computed.total).abs() < f64::EPSILON);
        assert_eq!(computed.letter_grade, LetterGrade::F);
        assert_eq!(computed.grade_points, 0);
    }

    #[test]
    fn raw_fields_carry_over_unchanged() {
        let mut course = Course::new("CS101", "Data Structures");
        course.attendance_percentage = Some(85.0);
        course.credits = Some(4.0);

        let computed = compute_course_fields(&course);
        assert_eq!(computed.course, course);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let mut course = Course::new("CS101", "Data Structures");
        course.set_internal_assessments(11.5, 9.25, 13.75);
        course.lab = Some(18.5);
        course.other = Some(21.0);
        course.external = Some(37.5);

        assert_eq!(compute_course_fields(&course), compute_course_fields(&course));
    }

    #[test]
    fn sgpa_weights_by_credits() {
        // Grade points 9, 8, 10 via totals 80, 70, 90.
        let courses = vec![
            graded_course(4.0, 80.0),
            graded_course(3.0, 70.0),
            graded_course(3.0, 90.0),
        ];
        // (36 + 24 + 30) / 10 = 9.00
        assert!((compute_semester_sgpa(&courses) - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sgpa_is_order_independent() {
        let mut courses = vec![
            graded_course(4.0, 80.0),
            graded_course(3.0, 70.0),
            graded_course(3.0, 90.0),
        ];
        let forward = compute_semester_sgpa(&courses);
        courses.reverse();
        assert!((compute_semester_sgpa(&courses) - forward).abs() < f64::EPSILON);
    }

    #[test]
    fn sgpa_of_empty_list_is_zero() {
        assert!((compute_semester_sgpa(&[])).abs() < f64::EPSILON);
    }

    #[test]
    fn sgpa_with_zero_credits_is_zero() {
        // No division-by-zero propagation.
        let courses = vec![graded_course(0.0, 90.0)];
        assert!((compute_semester_sgpa(&courses)).abs() < f64::EPSILON);
    }

    #[test]
    fn sgpa_rounds_to_two_decimals() {
        // (4*10 + 3*8) / 7 = 64/7 = 9.142857... -> 9.14
        let courses = vec![graded_course(4.0, 95.0), graded_course(3.0, 72.0)];
        assert!((compute_semester_sgpa(&courses) - 9.14).abs() < 0.001);
    }

    #[test]
    fn missing_credits_count_as_zero_weight() {
        let mut no_credits = graded_course(0.0, 90.0);
        no_credits.course.credits = None;

        let courses = vec![no_credits, graded_course(4.0, 80.0)];
        // Only the 4-credit course contributes: 36/4 = 9.00
        assert!((compute_semester_sgpa(&courses) - 9.0).abs() < f64::EPSILON);
    }
}
