//! Admission percentage formula
//!
//! `percentage = (GPA / 4) × 90 + preference bonus`, where the bonus is
//! 10, 8, 6, 4, 2 points for the first five choices and 0 afterwards.
//! All functions here are pure and total over finite input.

/// Top of the GPA scale
pub const GPA_SCALE: f64 = 4.0;

/// Share of the percentage carried by the GPA
pub const BASE_WEIGHT: f64 = 90.0;

/// Bonus awarded to the first choice
pub const TOP_CHOICE_BONUS: u32 = 10;

/// Bonus lost per rank below the first choice
pub const BONUS_STEP: u32 = 2;

/// GPA-proportional part of the percentage.
///
/// No clamping: callers gate the input with [`is_valid_gpa`] first.
#[must_use]
pub fn compute_base_percentage(gpa: f64) -> f64 {
    (gpa / GPA_SCALE) * BASE_WEIGHT
}

/// Preference bonus for a 1-based rank, floored at zero.
///
/// Independent of catalog size: every rank past the fifth scores 0. A rank
/// of 0 is treated as the first choice.
#[must_use]
pub fn compute_preference_bonus(rank: usize) -> u32 {
    let steps = u32::try_from(rank.saturating_sub(1)).unwrap_or(u32::MAX);
    TOP_CHOICE_BONUS.saturating_sub(steps.saturating_mul(BONUS_STEP))
}

/// Admission percentage for a GPA at a given 1-based rank.
#[must_use]
pub fn compute_percentage(gpa: f64, rank: usize) -> f64 {
    compute_base_percentage(gpa) + f64::from(compute_preference_bonus(rank))
}

/// Parse user-entered GPA text, returning the value only when it is a
/// finite number in `[0, 4]`. Surrounding whitespace is ignored.
#[must_use]
pub fn parse_gpa(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|gpa| gpa.is_finite() && (0.0..=GPA_SCALE).contains(gpa))
}

/// Display gate for the score table.
///
/// Malformed and out-of-range input are not distinguished; both are simply
/// "not ready to score".
#[must_use]
pub fn is_valid_gpa(raw: &str) -> bool {
    parse_gpa(raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_base_percentage() {
        assert!((compute_base_percentage(3.75) - 84.375).abs() < EPS);
        assert!((compute_base_percentage(4.0) - 90.0).abs() < EPS);
        assert!(compute_base_percentage(0.0).abs() < EPS);
    }

    #[test]
    fn test_base_percentage_does_not_clamp() {
        assert!((compute_base_percentage(5.0) - 112.5).abs() < EPS);
        assert!((compute_base_percentage(-1.0) + 22.5).abs() < EPS);
    }

    #[test]
    fn test_bonus_sequence() {
        let bonuses: Vec<u32> = (1..=8).map(compute_preference_bonus).collect();
        assert_eq!(bonuses, vec![10, 8, 6, 4, 2, 0, 0, 0]);
    }

    #[test]
    fn test_bonus_for_huge_rank() {
        assert_eq!(compute_preference_bonus(usize::MAX), 0);
        assert_eq!(compute_preference_bonus(0), TOP_CHOICE_BONUS);
    }

    #[test]
    fn test_percentage_scenarios() {
        assert!((compute_percentage(3.75, 1) - 94.375).abs() < EPS);
        assert!((compute_percentage(3.75, 6) - 84.375).abs() < EPS);
        assert!((compute_percentage(0.0, 1) - 10.0).abs() < EPS);
        assert!((compute_percentage(4.0, 3) - 96.0).abs() < EPS);
    }

    #[test]
    fn test_percentage_non_increasing_in_rank() {
        for gpa in [0.0, 1.3, 2.5, 3.75, 4.0] {
            let totals: Vec<f64> = (1..=10).map(|rank| compute_percentage(gpa, rank)).collect();
            assert!(totals.windows(2).all(|w| w[0] >= w[1]), "gpa {gpa}: {totals:?}");
        }
    }

    #[test]
    fn test_percentage_matches_formula() {
        for gpa in [0.0, 0.5, 2.0, 3.1, 3.99, 4.0] {
            for rank in 1..=8_usize {
                let steps = u32::try_from(rank - 1).unwrap();
                let bonus = 10_u32.saturating_sub(steps * 2);
                let expected = (gpa / 4.0) * 90.0 + f64::from(bonus);
                assert!((compute_percentage(gpa, rank) - expected).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_is_valid_gpa_accepts() {
        for raw in ["0", "4.0", "3.75", " 2.5 ", "4", ".5"] {
            assert!(is_valid_gpa(raw), "{raw:?} should be valid");
        }
    }

    #[test]
    fn test_is_valid_gpa_rejects() {
        for raw in ["", "-0.1", "4.01", "abc", "NaN", "inf", "3.5.1", "3,5"] {
            assert!(!is_valid_gpa(raw), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_gpa_value() {
        assert_eq!(parse_gpa("3.75"), Some(3.75));
        assert_eq!(parse_gpa("4.5"), None);
    }
}
