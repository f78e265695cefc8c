//! Markdown report generator
//!
//! Renders the advisor report as plain Markdown with pipe tables, suitable
//! for GitHub, GitLab and most note-taking tools.

use crate::core::get_version;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::scoring::{format_percentage, FORMULA_LEGEND, STRATEGIC_TIP};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        fill_placeholders(MARKDOWN_TEMPLATE, |key| match key {
            "gpa" => Some(escape_cell(&ctx.gpa_display())),
            "notices" => Some(Self::generate_notices(ctx)),
            "formula_legend" => Some(FORMULA_LEGEND.to_string()),
            "score_table" => Some(Self::generate_score_table(ctx)),
            "recommendations" => Some(Self::generate_recommendations_table(ctx)),
            "cutoffs" => Some(Self::generate_cutoffs_table(ctx)),
            "testimonials" => Some(Self::generate_testimonials(ctx)),
            "version" => Some(get_version().to_string()),
            _ => None,
        })
    }

    fn generate_notices(ctx: &ReportContext) -> String {
        let mut out = String::new();
        for notice in ctx.notices {
            let _ = writeln!(out, "> **{}**: {}\n", notice.title, notice.description);
        }
        out
    }

    /// Generate the preference score table, or a prompt when no GPA is set
    fn generate_score_table(ctx: &ReportContext) -> String {
        let Some(rows) = ctx.rows else {
            return "_Enter a GPA between 0.0 and 4.0 to see preference scores._\n".to_string();
        };

        let mut table = String::new();
        table.push_str("| Rank | Department | Score | Breakdown |\n");
        table.push_str("|---|---|---|---|\n");
        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | **{}** | {} |",
                row.choice_label(),
                escape_cell(&row.department_label),
                row.formatted_total(),
                row.breakdown()
            );
        }
        let _ = write!(table, "\n> {STRATEGIC_TIP}\n");
        table
    }

    fn generate_recommendations_table(ctx: &ReportContext) -> String {
        if ctx.recommendations.is_empty() {
            return "_No recommendations available._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Department | Match | Tier | Cutoff | About |\n");
        table.push_str("|---|---|---|---|---|\n");
        for (i, rec) in ctx.ranked_recommendations().into_iter().enumerate() {
            let badge = if i == 0 {
                " (Best Match)"
            } else {
                ""
            };
            let _ = writeln!(
                table,
                "| {}{badge} | {} | {} | {:.1} | {} |",
                escape_cell(&rec.name),
                format_percentage(rec.match_percentage),
                rec.tier(),
                rec.cutoff,
                escape_cell(&rec.description)
            );
        }
        table
    }

    fn generate_cutoffs_table(ctx: &ReportContext) -> String {
        if ctx.cutoffs.is_empty() {
            return "_No cutoff history available._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Department | Latest Year | Cutoff | Trend |\n");
        table.push_str("|---|---|---|---|\n");
        for summary in ctx.cutoffs {
            let (year, cutoff) = summary.latest.as_ref().map_or_else(
                || ("-".to_string(), "-".to_string()),
                |r| (r.year.to_string(), format!("{:.1}", r.cutoff)),
            );
            let trend = summary.trend_label().unwrap_or_else(|| "steady".to_string());
            let _ = writeln!(
                table,
                "| {} | {year} | {cutoff} | {trend} |",
                escape_cell(&summary.department)
            );
        }
        table
    }

    fn generate_testimonials(ctx: &ReportContext) -> String {
        if ctx.testimonials.is_empty() {
            return "_No testimonials available._\n".to_string();
        }

        let mut out = String::new();
        for t in ctx.testimonials {
            let _ = writeln!(out, "> \"{}\"", t.quote);
            let _ = writeln!(out, ">");
            let _ = writeln!(
                out,
                "> *{}, {} ({})*\n",
                t.student_name, t.department, t.year
            );
        }
        out
    }
}

/// Replace each `{{key}}` in `template` with `value(key)` in a single pass.
///
/// Substituted text is never scanned again. Unknown keys are left as written.
fn fill_placeholders(template: &str, value: impl Fn(&str) -> Option<String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };
        let key = &after_open[..end];
        match value(key) {
            Some(text) => output.push_str(&text),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }
    output.push_str(rest);
    output
}

/// Keep user-supplied text from breaking a pipe table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
