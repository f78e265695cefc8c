//! Advisor report generation
//!
//! Collects a score table, recommendations, cutoff summaries and testimonials
//! into a single document in Markdown or HTML.

pub mod formats;

use crate::core::api::Notice;
use crate::core::cutoffs::CutoffSummary;
use crate::core::models::{sort_by_match, Recommendation, Testimonial};
use crate::core::scoring::ScoreRow;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Default report file stem; the format supplies the extension
pub const REPORT_FILE_STEM: &str = "advisor_report";

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// GPA exactly as entered
    pub gpa_text: &'a str,
    /// Score rows; `None` when the GPA is missing or invalid
    pub rows: Option<&'a [ScoreRow]>,
    /// Department recommendations
    pub recommendations: &'a [Recommendation],
    /// Per-department cutoff summaries
    pub cutoffs: &'a [CutoffSummary],
    /// Alumni testimonials
    pub testimonials: &'a [Testimonial],
    /// Sample-data notices to print at the top
    pub notices: &'a [Notice],
}

impl<'a> ReportContext<'a> {
    /// Create a new report context without notices
    #[must_use]
    pub const fn new(
        gpa_text: &'a str,
        rows: Option<&'a [ScoreRow]>,
        recommendations: &'a [Recommendation],
        cutoffs: &'a [CutoffSummary],
        testimonials: &'a [Testimonial],
    ) -> Self {
        Self {
            gpa_text,
            rows,
            recommendations,
            cutoffs,
            testimonials,
            notices: &[],
        }
    }

    /// Attach sample-data notices
    #[must_use]
    pub const fn with_notices(mut self, notices: &'a [Notice]) -> Self {
        self.notices = notices;
        self
    }

    /// Returns `true` if a score table is available
    #[must_use]
    pub const fn has_scores(&self) -> bool {
        self.rows.is_some()
    }

    /// GPA line for the report header
    #[must_use]
    pub fn gpa_display(&self) -> String {
        let trimmed = self.gpa_text.trim();
        if self.has_scores() {
            trimmed.to_string()
        } else if trimmed.is_empty() {
            "not entered".to_string()
        } else {
            format!("{trimmed} (invalid, enter a value from 0.0 to 4.0)")
        }
    }

    /// The row ranked first, if any
    #[must_use]
    pub fn top_choice(&self) -> Option<&'a ScoreRow> {
        self.rows.and_then(|rows| rows.first())
    }

    /// Recommendations in display order, highest match first
    #[must_use]
    pub fn ranked_recommendations(&self) -> Vec<&'a Recommendation> {
        let mut ranked: Vec<&'a Recommendation> = self.recommendations.iter().collect();
        sort_by_match(&mut ranked);
        ranked
    }

    /// Recommendation with the highest match percentage
    #[must_use]
    pub fn best_recommendation(&self) -> Option<&'a Recommendation> {
        self.ranked_recommendations().first().copied()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for `format`
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
