//! Core module: the academic performance computation engine.
//!
//! The engine itself is a handful of pure functions (grade classification,
//! internal-mark aggregation, course-field computation, SGPA) plus an
//! advisory validator. Everything here reads only its arguments; nothing
//! holds shared state, so every function is safe to call from any thread.

pub mod compute;
pub mod config;
pub mod export;
pub mod grading;
pub mod internal;
pub mod marksheet;
pub mod models;
pub mod numeric;
pub mod report;
pub mod validation;

/// Returns the current version of the `gradecard` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
