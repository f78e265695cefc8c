//! HTML report generator
//!
//! Renders a self-contained HTML page with embedded CSS. Values pass through
//! askama, which escapes them for HTML.

use crate::core::get_version;
use crate::core::models::Testimonial;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::scoring::{format_percentage, Highlight, FORMULA_LEGEND, STRATEGIC_TIP};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

struct ScoreLine {
    class: &'static str,
    choice: String,
    label: String,
    total: String,
    breakdown: String,
}

struct RecommendationLine {
    name: String,
    best: bool,
    matched: String,
    tier: String,
    cutoff: String,
    description: String,
}

struct CutoffLine {
    department: String,
    year: String,
    cutoff: String,
    trend: String,
    class: &'static str,
}

#[derive(Template)]
#[template(path = "advisor_report.html")]
struct AdvisorReportPage<'a> {
    gpa: String,
    notices: &'a [crate::core::api::Notice],
    formula_legend: &'static str,
    strategic_tip: &'static str,
    rows: Vec<ScoreLine>,
    recommendations: Vec<RecommendationLine>,
    cutoffs: Vec<CutoffLine>,
    testimonials: &'a [Testimonial],
    version: &'static str,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_page<'a>(ctx: &ReportContext<'a>) -> AdvisorReportPage<'a> {
        let rows = ctx
            .rows
            .unwrap_or_default()
            .iter()
            .map(|row| ScoreLine {
                class: match row.highlight() {
                    Highlight::Primary => "primary",
                    Highlight::Emphasis => "emphasis",
                    Highlight::Muted => "muted",
                },
                choice: row.choice_label(),
                label: row.department_label.clone(),
                total: row.formatted_total(),
                breakdown: row.breakdown(),
            })
            .collect();

        let recommendations = ctx
            .ranked_recommendations()
            .into_iter()
            .enumerate()
            .map(|(i, rec)| RecommendationLine {
                name: rec.name.clone(),
                best: i == 0,
                matched: format_percentage(rec.match_percentage),
                tier: rec.tier().to_string(),
                cutoff: format!("{:.1}", rec.cutoff),
                description: rec.description.clone(),
            })
            .collect();

        let cutoffs = ctx
            .cutoffs
            .iter()
            .map(|summary| {
                let (year, cutoff) = summary.latest.as_ref().map_or_else(
                    || ("-".to_string(), "-".to_string()),
                    |r| (r.year.to_string(), format!("{:.1}", r.cutoff)),
                );
                let class = if summary.is_rising() {
                    "rising"
                } else if summary.trend < 0.0 {
                    "falling"
                } else {
                    ""
                };
                CutoffLine {
                    department: summary.department.clone(),
                    year,
                    cutoff,
                    trend: summary.trend_label().unwrap_or_else(|| "steady".to_string()),
                    class,
                }
            })
            .collect();

        AdvisorReportPage {
            gpa: ctx.gpa_display(),
            notices: ctx.notices,
            formula_legend: FORMULA_LEGEND,
            strategic_tip: STRATEGIC_TIP,
            rows,
            recommendations,
            cutoffs,
            testimonials: ctx.testimonials,
            version: get_version(),
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build_page(ctx).render()?)
    }
}
