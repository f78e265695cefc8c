//! Core module: scoring, data models, backend access and reports

pub mod api;
pub mod config;
pub mod cutoffs;
pub mod models;
pub mod quiz;
pub mod report;
pub mod samples;
pub mod scoring;
pub mod session;
pub mod testimonials;

/// Returns the current version of the `dept-advisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
