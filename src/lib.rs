//! Department advisor library
//!
//! Preference-weighted admission scoring for six engineering departments,
//! plus the interest quiz, cutoff trends, alumni testimonials and reports
//! used by the `deptadvisor` CLI.

pub mod core;
pub mod logger;

pub use crate::core::get_version;
