//! Score rows handed to the presentation layer

use super::formula::{compute_base_percentage, compute_preference_bonus};
use super::order::PreferenceOrder;
use serde::Serialize;

/// Advice shown next to a valid score table
pub const STRATEGIC_TIP: &str = "Reorder departments to match your preferences! Your 1st choice \
gets 10 extra points, 2nd gets 8 points, 3rd gets 6 points, and so on. Choose wisely!";

/// Formula legend shown above the table
pub const FORMULA_LEGEND: &str = "Formula: (GPA ÷ 4) × 90 + Preference Points";

/// Visual emphasis for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// The first choice
    Primary,
    /// Second and third choices
    Emphasis,
    /// Everything else
    Muted,
}

/// One department's score at its current rank
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    /// Department id
    pub department_id: String,
    /// Short label shown to the user
    pub department_label: String,
    /// 1-based rank
    pub rank: usize,
    /// GPA-proportional part
    pub base_part: f64,
    /// Rank-dependent bonus
    pub bonus_part: u32,
    /// `base_part + bonus_part`
    pub total: f64,
}

impl ScoreRow {
    /// `"1st Choice"`, `"2nd Choice"`, ...
    #[must_use]
    pub fn choice_label(&self) -> String {
        format!("{} Choice", ordinal(self.rank))
    }

    /// Emphasis for this row's rank
    #[must_use]
    pub const fn highlight(&self) -> Highlight {
        match self.rank {
            0 | 1 => Highlight::Primary,
            2 | 3 => Highlight::Emphasis,
            _ => Highlight::Muted,
        }
    }

    /// Total formatted to one decimal place, e.g. `"94.4%"`
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format_percentage(self.total)
    }

    /// Breakdown line, e.g. `"84.4% + 10 points"`
    #[must_use]
    pub fn breakdown(&self) -> String {
        format!("{} + {} points", format_percentage(self.base_part), self.bonus_part)
    }
}

/// Format a percentage to one decimal place with a `%` suffix
///
/// Halves round away from zero, so `66.25` shows as `"66.3%"`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", (value * 10.0).round() / 10.0)
}

/// English ordinal for a rank: 1st, 2nd, 3rd, 4th, ... 11th, 12th, 13th, 21st
#[must_use]
pub fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}

/// Project an order and a validated GPA into score rows.
#[must_use]
pub fn build_rows(gpa: f64, order: &PreferenceOrder) -> Vec<ScoreRow> {
    let base_part = compute_base_percentage(gpa);
    order
        .entries()
        .iter()
        .enumerate()
        .map(|(index, dept)| {
            let rank = index + 1;
            let bonus_part = compute_preference_bonus(rank);
            ScoreRow {
                department_id: dept.id.clone(),
                department_label: dept.short_label.clone(),
                rank,
                base_part,
                bonus_part,
                total: base_part + f64::from(bonus_part),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::default_catalog;

    #[test]
    fn test_ordinals() {
        let labels: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101].map(ordinal).to_vec();
        assert_eq!(
            labels,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st"]
        );
    }

    #[test]
    fn test_rows_for_default_order() {
        let order = PreferenceOrder::from_catalog(&default_catalog());
        let rows = build_rows(3.75, &order);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].department_label, "Civil");
        assert_eq!(rows[0].formatted_total(), "94.4%");
        assert_eq!(rows[0].breakdown(), "84.4% + 10 points");
        assert_eq!(rows[0].choice_label(), "1st Choice");
        assert_eq!(rows[5].formatted_total(), "84.4%");
    }

    #[test]
    fn test_halves_round_up() {
        let order = PreferenceOrder::from_catalog(&default_catalog());

        let rows = build_rows(2.5, &order);
        assert_eq!(rows[0].formatted_total(), "66.3%");
        assert_eq!(rows[0].breakdown(), "56.3% + 10 points");

        let rows = build_rows(3.7, &order);
        assert_eq!(rows[0].formatted_total(), "93.3%");

        assert_eq!(format_percentage(12.25), "12.3%");
        assert_eq!(format_percentage(95.0), "95.0%");
    }

    #[test]
    fn test_highlights() {
        let order = PreferenceOrder::from_catalog(&default_catalog());
        let rows = build_rows(2.0, &order);
        let highlights: Vec<Highlight> = rows.iter().map(ScoreRow::highlight).collect();
        assert_eq!(
            highlights,
            vec![
                Highlight::Primary,
                Highlight::Emphasis,
                Highlight::Emphasis,
                Highlight::Muted,
                Highlight::Muted,
                Highlight::Muted
            ]
        );
    }
}
