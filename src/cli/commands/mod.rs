//! CLI command handlers

pub mod compute;
pub mod config;
pub mod report;
