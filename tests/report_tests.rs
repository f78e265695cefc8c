//! Integration tests for advisor report generation

use dept_advisor::core::api::{AdvisorData, OfflineBackend};
use dept_advisor::core::cutoffs::summarize_all;
use dept_advisor::core::report::{reporter_for, ReportContext, ReportFormat};
use dept_advisor::core::scoring::PreferenceScoringEngine;
use std::fs;
use tempfile::TempDir;

#[test]
fn sample_backed_reports_in_both_formats() {
    let data = AdvisorData::new(&OfflineBackend, true);
    let recommendations = data.recommendations().unwrap();
    let cutoffs = data.cutoffs().unwrap();
    let testimonials = data.testimonials().unwrap();
    let notices: Vec<_> = [
        recommendations.notice.clone(),
        cutoffs.notice.clone(),
        testimonials.notice.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    assert_eq!(notices.len(), 3);

    let engine = PreferenceScoringEngine::default();
    let order = engine
        .reorder(&engine.reset_order(), "software", "civil")
        .into_order();
    let rows = engine.score_table("3.2", &order).unwrap();
    let summaries = summarize_all(&cutoffs.data);

    let ctx = ReportContext::new(
        "3.2",
        Some(&rows),
        &recommendations.data,
        &summaries,
        &testimonials.data,
    )
    .with_notices(&notices);

    let dir = TempDir::new().expect("Failed to create temp dir");
    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = dir.path().join(format!("advisor_report.{}", format.extension()));
        reporter_for(format)
            .generate(&ctx, &path)
            .expect("report should be written");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("SiTE (Software)"), "{format}: top choice missing");
        assert!(content.contains("82.0%"), "{format}: 72 + 10 missing");
        assert!(content.contains("Using Sample Data"), "{format}: notice missing");
        assert!(content.contains("Information Technology"));
        assert!(content.contains("Carlos Mendoza"));
    }
}

#[test]
fn report_without_gpa_omits_table() {
    let ctx = ReportContext::new("abc", None, &[], &[], &[]);
    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let content = reporter_for(format).render(&ctx).unwrap();
        assert!(!content.contains("1st Choice"));
        assert!(content.contains("abc (invalid"));
    }
}
