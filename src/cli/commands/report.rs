//! Report command handler
//!
//! Generates the advisor report in Markdown or HTML.

use super::{apply_moves, engine_from_config, Backend};
use dept_advisor::core::config::Config;
use dept_advisor::core::cutoffs::summarize_all;
use dept_advisor::core::report::{reporter_for, ReportContext, ReportFormat, REPORT_FILE_STEM};
use dept_advisor::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `gpa` - Optional GPA text; without a valid GPA the score table is omitted
/// * `moves` - `DEPT:TARGET` moves applied to the catalog order
/// * `format_str` - Report format (markdown, html)
/// * `output_file` - Optional output path
/// * `config` - Configuration containing the default reports directory
/// * `backend` - Backend for recommendations, cutoffs and testimonials
pub fn run(
    gpa: Option<&str>,
    moves: &[String],
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
    backend: &Backend,
) -> bool {
    match generate_report(gpa, moves, format_str, output_file, config, backend) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            true
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("{err}");
            false
        }
    }
}

/// Resolve where the report goes: explicit path, else `<reports_dir>/advisor_report.<ext>`
fn output_path(output_file: Option<&Path>, config: &Config, format: ReportFormat) -> PathBuf {
    output_file.map_or_else(
        || {
            PathBuf::from(&config.paths.reports_dir)
                .join(format!("{REPORT_FILE_STEM}.{}", format.extension()))
        },
        Path::to_path_buf,
    )
}

fn generate_report(
    gpa: Option<&str>,
    moves: &[String],
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
    backend: &Backend,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;

    let engine = engine_from_config(config);
    let order = apply_moves(&engine, moves).map_err(|e| format!("✗ {e}"))?;
    let gpa_text = gpa.unwrap_or_default();
    let rows = engine.score_table(gpa_text, &order);
    if gpa.is_some() && rows.is_none() {
        warn!(
            "GPA '{}' is not between 0.00 and 4.00; omitting the score table",
            gpa_text.trim()
        );
    }

    let data = backend.data();
    let recommendations = data
        .recommendations()
        .map_err(|e| format!("✗ Failed to load recommendations: {e}"))?;
    let cutoffs = data
        .cutoffs()
        .map_err(|e| format!("✗ Failed to load cutoff data: {e}"))?;
    let testimonials = data
        .testimonials()
        .map_err(|e| format!("✗ Failed to load testimonials: {e}"))?;

    let notices: Vec<_> = [
        recommendations.notice.clone(),
        cutoffs.notice.clone(),
        testimonials.notice.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    let summaries = summarize_all(&cutoffs.data);

    let ctx = ReportContext::new(
        gpa_text,
        rows.as_deref(),
        &recommendations.data,
        &summaries,
        &testimonials.data,
    )
    .with_notices(&notices);

    let path = output_path(output_file, config, format);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                parent.display()
            )
        })?;
    }

    reporter_for(format)
        .generate(&ctx, &path)
        .map_err(|e| format!("✗ Failed to write {format} report {}: {e}", path.display()))?;
    info!("{format} report written to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_defaults_to_reports_dir() {
        let mut config = Config::from_defaults();
        config.paths.reports_dir = "/tmp/advisor-reports".to_string();

        assert_eq!(
            output_path(None, &config, ReportFormat::Html),
            PathBuf::from("/tmp/advisor-reports/advisor_report.html")
        );
        assert_eq!(
            output_path(Some(Path::new("out.md")), &config, ReportFormat::Markdown),
            PathBuf::from("out.md")
        );
    }
}
