//! Shared library for `gradecard`
//! Contains the semester-marks computation core and the surfaces the CLI
//! builds on: marksheet parsing, computed-CSV export, report generation,
//! and configuration.

pub mod core;

pub use core::config;
