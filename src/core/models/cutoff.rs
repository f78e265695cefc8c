//! Historical cutoff model

use serde::{Deserialize, Serialize};

/// Minimum admitted GPA for a department in a given year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoffRecord {
    /// Admission year
    pub year: u16,

    /// Department name
    pub department: String,

    /// GPA cutoff on a 4.0 scale
    pub cutoff: f64,
}

impl CutoffRecord {
    /// Create a new cutoff record
    #[must_use]
    pub fn new(year: u16, department: &str, cutoff: f64) -> Self {
        Self {
            year,
            department: department.to_string(),
            cutoff,
        }
    }
}
