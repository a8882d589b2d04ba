//! Data models for `gradecard`

pub mod computed;
pub mod course;
pub mod semester;

pub use computed::ComputedCourse;
pub use course::Course;
pub use semester::Semester;
