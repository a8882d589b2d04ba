//! Report generation for computed semesters
//!
//! Renders a semester marks card in Markdown or HTML from embedded
//! templates, with summary figures (SGPA, credits, grade distribution)
//! alongside the per-course table.

pub mod formats;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

use crate::core::grading::LetterGrade;
use crate::core::models::Semester;
use std::error::Error;
use std::path::Path;

/// All letter grades, best to worst, for distribution tables
const ALL_GRADES: [LetterGrade; 7] = [
    LetterGrade::S,
    LetterGrade::A,
    LetterGrade::B,
    LetterGrade::C,
    LetterGrade::D,
    LetterGrade::E,
    LetterGrade::F,
];

/// Summary statistics for a semester
#[derive(Debug, Clone)]
pub struct SemesterSummary {
    /// Credit-weighted SGPA, two decimals
    pub sgpa: f64,
    /// Sum of credits across courses
    pub total_credits: f64,
    /// Number of courses
    pub course_count: usize,
    /// Course code with the highest total (empty when no courses)
    pub best_course: String,
    /// Highest course total
    pub best_total: f64,
    /// Course code with the lowest total (empty when no courses)
    pub weakest_course: String,
    /// Lowest course total
    pub weakest_total: f64,
    /// Count of courses per letter grade, best to worst
    pub grade_counts: Vec<(LetterGrade, usize)>,
}

impl SemesterSummary {
    /// Compute summary statistics from a semester
    #[must_use]
    pub fn from_semester(semester: &Semester) -> Self {
        let mut best_course = String::new();
        let mut best_total = f64::NEG_INFINITY;
        let mut weakest_course = String::new();
        let mut weakest_total = f64::INFINITY;

        for computed in &semester.courses {
            if computed.total > best_total {
                best_total = computed.total;
                best_course.clone_from(&computed.course.course_code);
            }
            if computed.total < weakest_total {
                weakest_total = computed.total;
                weakest_course.clone_from(&computed.course.course_code);
            }
        }

        if semester.courses.is_empty() {
            best_total = 0.0;
            weakest_total = 0.0;
        }

        let grade_counts = ALL_GRADES
            .iter()
            .map(|&grade| {
                let count = semester
                    .courses
                    .iter()
                    .filter(|c| c.letter_grade == grade)
                    .count();
                (grade, count)
            })
            .collect();

        Self {
            sgpa: semester.sgpa(),
            total_credits: semester.total_credits(),
            course_count: semester.course_count(),
            best_course,
            best_total,
            weakest_course,
            weakest_total,
            grade_counts,
        }
    }
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Semester being reported
    pub semester: &'a Semester,
    /// Summary statistics
    pub summary: &'a SemesterSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(semester: &'a Semester, summary: &'a SemesterSummary) -> Self {
        Self { semester, summary }
    }

    /// Title line for the report
    #[must_use]
    pub fn title(&self) -> String {
        if self.semester.academic_year.is_empty() {
            format!("Semester {}", self.semester.number)
        } else {
            format!(
                "Semester {} ({})",
                self.semester.number, self.semester.academic_year
            )
        }
    }
}

/// Trait for rendering a semester report in a specific format
pub trait ReportGenerator {
    /// Render the report and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if the report cannot be written
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute::compute_course_fields;
    use crate::core::models::Course;

    fn semester_with_two_courses() -> Semester {
        let mut semester = Semester::new(1, "2024-2025");

        let mut strong = Course::new("CS101", "Data Structures");
        strong.external = Some(92.0);
        strong.credits = Some(4.0);
        semester.add_course(compute_course_fields(&strong));

        let mut weak = Course::new("CS102", "Algorithms");
        weak.external = Some(45.0);
        weak.credits = Some(3.0);
        semester.add_course(compute_course_fields(&weak));

        semester
    }

    #[test]
    fn summary_tracks_best_and_weakest() {
        let semester = semester_with_two_courses();
        let summary = SemesterSummary::from_semester(&semester);

        assert_eq!(summary.best_course, "CS101");
        assert!((summary.best_total - 92.0).abs() < f64::EPSILON);
        assert_eq!(summary.weakest_course, "CS102");
        assert!((summary.weakest_total - 45.0).abs() < f64::EPSILON);
        assert_eq!(summary.course_count, 2);
        assert!((summary.total_credits - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_of_empty_semester_is_all_zero() {
        let summary = SemesterSummary::from_semester(&Semester::new(1, "2024-2025"));

        assert!((summary.sgpa).abs() < f64::EPSILON);
        assert_eq!(summary.course_count, 0);
        assert!(summary.best_course.is_empty());
        assert!((summary.best_total).abs() < f64::EPSILON);
        assert!((summary.weakest_total).abs() < f64::EPSILON);
    }

    #[test]
    fn grade_counts_cover_every_letter() {
        let semester = semester_with_two_courses();
        let summary = SemesterSummary::from_semester(&semester);

        assert_eq!(summary.grade_counts.len(), 7);
        // 92 -> S, 45 -> E
        let count_for = |grade: LetterGrade| {
            summary
                .grade_counts
                .iter()
                .find(|(g, _)| *g == grade)
                .map(|(_, n)| *n)
        };
        assert_eq!(count_for(LetterGrade::S), Some(1));
        assert_eq!(count_for(LetterGrade::E), Some(1));
        assert_eq!(count_for(LetterGrade::F), Some(0));
    }

    #[test]
    fn title_includes_year_when_present() {
        let semester = semester_with_two_courses();
        let summary = SemesterSummary::from_semester(&semester);
        let ctx = ReportContext::new(&semester, &summary);
        assert_eq!(ctx.title(), "Semester 1 (2024-2025)");
    }
}
