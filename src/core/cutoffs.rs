//! Cutoff trend analysis
//!
//! Turns flat `(year, department, cutoff)` records into chart rows and
//! per-department summaries.

use crate::core::models::CutoffRecord;
use std::collections::BTreeMap;

/// Cutoffs of every department for one year
#[derive(Debug, Clone, PartialEq)]
pub struct YearRow {
    /// Admission year
    pub year: u16,
    /// Department name to cutoff
    pub cutoffs: BTreeMap<String, f64>,
}

/// Latest cutoff and year-over-year change for a department
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffSummary {
    /// Department name
    pub department: String,
    /// Most recent record, if any
    pub latest: Option<CutoffRecord>,
    /// Latest minus previous cutoff; 0 with fewer than two records
    pub trend: f64,
}

impl CutoffSummary {
    /// Human-readable trend, e.g. `"+0.10 from last year"`; `None` when flat
    #[must_use]
    pub fn trend_label(&self) -> Option<String> {
        if self.trend.abs() < f64::EPSILON {
            return None;
        }
        let sign = if self.trend > 0.0 { "+" } else { "" };
        Some(format!("{sign}{:.2} from last year", self.trend))
    }

    /// Returns `true` if admission got harder since the previous year
    #[must_use]
    pub fn is_rising(&self) -> bool {
        self.trend > f64::EPSILON
    }
}

/// Group records by year, ascending.
///
/// A later record for the same year and department replaces an earlier one.
#[must_use]
pub fn chart_rows(records: &[CutoffRecord]) -> Vec<YearRow> {
    let mut by_year: BTreeMap<u16, BTreeMap<String, f64>> = BTreeMap::new();
    for record in records {
        by_year
            .entry(record.year)
            .or_default()
            .insert(record.department.clone(), record.cutoff);
    }
    by_year
        .into_iter()
        .map(|(year, cutoffs)| YearRow { year, cutoffs })
        .collect()
}

/// Department names in order of first appearance
#[must_use]
pub fn departments(records: &[CutoffRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        if !names.contains(&record.department) {
            names.push(record.department.clone());
        }
    }
    names
}

/// Summarise one department using record order: the last record is the
/// latest, the one before it the previous year.
#[must_use]
pub fn summarize(records: &[CutoffRecord], department: &str) -> CutoffSummary {
    let series: Vec<&CutoffRecord> = records
        .iter()
        .filter(|r| r.department == department)
        .collect();

    let latest = series.last().copied();
    let previous = series.len().checked_sub(2).and_then(|i| series.get(i)).copied();
    let trend = match (latest, previous) {
        (Some(latest), Some(previous)) => latest.cutoff - previous.cutoff,
        _ => 0.0,
    };

    CutoffSummary {
        department: department.to_string(),
        latest: latest.cloned(),
        trend,
    }
}

/// Summaries for every department, in first-appearance order
#[must_use]
pub fn summarize_all(records: &[CutoffRecord]) -> Vec<CutoffSummary> {
    departments(records)
        .iter()
        .map(|dept| summarize(records, dept))
        .collect()
}
