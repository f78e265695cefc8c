//! Read-only views: recommendations, cutoffs and testimonials

use super::{print_notice, Backend};
use dept_advisor::core::cutoffs::{chart_rows, departments, summarize, summarize_all};
use dept_advisor::core::models::sort_by_match;
use dept_advisor::core::scoring::format_percentage;
use dept_advisor::core::testimonials::{filter_by_department, filter_options};
use dept_advisor::error;
use dept_advisor::verbose;

/// Print department recommendations, best match first
pub fn recommendations(backend: &Backend) -> bool {
    let fetched = match backend.data().recommendations() {
        Ok(fetched) => fetched,
        Err(e) => {
            error!("Failed to load recommendations: {e}");
            eprintln!("✗ Failed to load recommendations: {e}");
            return false;
        }
    };
    print_notice(fetched.notice.as_ref());

    let mut recs = fetched.data;
    if recs.is_empty() {
        println!("No recommendations yet. Take the quiz with `deptadvisor quiz`.");
        return true;
    }
    sort_by_match(&mut recs);

    for (i, rec) in recs.iter().enumerate() {
        let badge = if i == 0 { "  [Best Match]" } else { "" };
        println!(
            "{}. {} - {} match ({}), cutoff {:.1}{badge}",
            i + 1,
            rec.name,
            format_percentage(rec.match_percentage),
            rec.tier(),
            rec.cutoff
        );
        println!("   {}", rec.description);
    }
    true
}

/// Print cutoff history and trends, optionally for one department
pub fn cutoffs(department: Option<&str>, backend: &Backend) -> bool {
    let fetched = match backend.data().cutoffs() {
        Ok(fetched) => fetched,
        Err(e) => {
            error!("Failed to load cutoffs: {e}");
            eprintln!("✗ Failed to load cutoff data: {e}");
            return false;
        }
    };
    print_notice(fetched.notice.as_ref());
    let records = fetched.data;

    let summaries = match department {
        Some(wanted) => {
            let Some(name) = departments(&records)
                .into_iter()
                .find(|name| name.eq_ignore_ascii_case(wanted))
            else {
                eprintln!("✗ No cutoff data for '{wanted}'");
                return false;
            };
            vec![summarize(&records, &name)]
        }
        None => summarize_all(&records),
    };

    for summary in &summaries {
        let latest = summary.latest.as_ref().map_or_else(
            || "no data".to_string(),
            |r| format!("{:.1} ({})", r.cutoff, r.year),
        );
        let trend = summary.trend_label().unwrap_or_else(|| "steady".to_string());
        println!("{:<24} {latest:<12} {trend}", summary.department);
    }

    // Year-by-year detail
    for row in chart_rows(&records) {
        let values: Vec<String> = summaries
            .iter()
            .filter_map(|s| {
                row.cutoffs
                    .get(&s.department)
                    .map(|c| format!("{}: {c:.1}", s.department))
            })
            .collect();
        if !values.is_empty() {
            verbose!("{}  {}", row.year, values.join(", "));
        }
    }
    true
}

/// Print testimonials, optionally filtered by department
pub fn testimonials(department: Option<&str>, backend: &Backend) -> bool {
    let fetched = match backend.data().testimonials() {
        Ok(fetched) => fetched,
        Err(e) => {
            error!("Failed to load testimonials: {e}");
            eprintln!("✗ Failed to load testimonials: {e}");
            return false;
        }
    };
    print_notice(fetched.notice.as_ref());
    let all = fetched.data;

    let selection = department.unwrap_or("All");
    let shown = filter_by_department(&all, selection);
    if shown.is_empty() {
        println!("No testimonials for '{selection}'.");
        println!("Available: {}", filter_options(&all).join(", "));
        return true;
    }

    for t in shown {
        println!("\"{}\"", t.quote);
        println!("  - {}, {} ({})\n", t.student_name, t.department, t.year);
    }
    true
}
