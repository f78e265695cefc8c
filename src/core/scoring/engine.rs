//! Preference scoring engine
//!
//! Holds the immutable department catalog and its configuration. The
//! current order and GPA text are owned by the caller and threaded through
//! these methods, which return new values instead of mutating anything.

use super::formula::parse_gpa;
use super::order::PreferenceOrder;
use super::table::{build_rows, ScoreRow};
use crate::core::models::{default_catalog, Department};
use crate::debug;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Whether the preference order may be rearranged
    pub reorderable: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { reorderable: true }
    }
}

/// Outcome of a reorder request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The order changed
    Moved(PreferenceOrder),
    /// Unknown or identical ids; the order is unchanged
    Unchanged(PreferenceOrder),
    /// The engine is configured as fixed-order
    Disabled(PreferenceOrder),
}

impl ReorderOutcome {
    /// The order to keep as current state
    #[must_use]
    pub fn into_order(self) -> PreferenceOrder {
        match self {
            Self::Moved(order) | Self::Unchanged(order) | Self::Disabled(order) => order,
        }
    }
}

/// Scores departments by GPA and preference rank
#[derive(Debug, Clone)]
pub struct PreferenceScoringEngine {
    catalog: Vec<Department>,
    options: EngineOptions,
}

impl Default for PreferenceScoringEngine {
    fn default() -> Self {
        Self::new(default_catalog(), EngineOptions::default())
    }
}

impl PreferenceScoringEngine {
    /// Create an engine over a catalog
    #[must_use]
    pub const fn new(catalog: Vec<Department>, options: EngineOptions) -> Self {
        Self { catalog, options }
    }

    /// Create an engine over the CTBE catalog
    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        Self::new(default_catalog(), options)
    }

    /// The reference catalog
    #[must_use]
    pub fn catalog(&self) -> &[Department] {
        &self.catalog
    }

    /// Engine configuration
    #[must_use]
    pub const fn options(&self) -> EngineOptions {
        self.options
    }

    /// The catalog order. Always succeeds and is idempotent.
    #[must_use]
    pub fn reset_order(&self) -> PreferenceOrder {
        PreferenceOrder::from_catalog(&self.catalog)
    }

    /// Resolve a user-supplied id or short label to a catalog id
    #[must_use]
    pub fn resolve_id(&self, query: &str) -> Option<&str> {
        self.catalog
            .iter()
            .find(|dept| dept.matches(query))
            .map(|dept| dept.id.as_str())
    }

    /// Relocate `moved_id` into `target_id`'s slot in `order`.
    ///
    /// Never fails: unknown ids, `moved_id == target_id` and fixed-order
    /// engines all hand back the order unchanged.
    #[must_use]
    pub fn reorder(&self, order: &PreferenceOrder, moved_id: &str, target_id: &str) -> ReorderOutcome {
        if !self.options.reorderable {
            debug!("Reorder {moved_id} -> {target_id} ignored: order is fixed");
            return ReorderOutcome::Disabled(order.clone());
        }

        let next = order.moved(moved_id, target_id);
        if next == *order {
            debug!("Reorder {moved_id} -> {target_id} left the order unchanged");
            ReorderOutcome::Unchanged(next)
        } else {
            debug!("Moved {moved_id} into the slot of {target_id}");
            ReorderOutcome::Moved(next)
        }
    }

    /// Score table for raw GPA text, or `None` when the text fails the
    /// validity gate.
    #[must_use]
    pub fn score_table(&self, gpa_text: &str, order: &PreferenceOrder) -> Option<Vec<ScoreRow>> {
        parse_gpa(gpa_text).map(|gpa| build_rows(gpa, order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table_gated_on_gpa() {
        let engine = PreferenceScoringEngine::default();
        let order = engine.reset_order();
        assert!(engine.score_table("abc", &order).is_none());
        assert!(engine.score_table("", &order).is_none());
        assert!(engine.score_table("4.01", &order).is_none());
        assert_eq!(engine.score_table("3.75", &order).map(|rows| rows.len()), Some(6));
    }

    #[test]
    fn test_fixed_engine_ignores_reorder() {
        let engine = PreferenceScoringEngine::with_options(EngineOptions { reorderable: false });
        let order = engine.reset_order();
        let outcome = engine.reorder(&order, "chemical", "civil");
        assert!(matches!(outcome, ReorderOutcome::Disabled(_)));
        assert_eq!(outcome.into_order(), order);
    }

    #[test]
    fn test_reorder_outcomes() {
        let engine = PreferenceScoringEngine::default();
        let order = engine.reset_order();
        assert!(matches!(
            engine.reorder(&order, "civil", "civil"),
            ReorderOutcome::Unchanged(_)
        ));
        assert!(matches!(
            engine.reorder(&order, "civil", "software"),
            ReorderOutcome::Moved(_)
        ));
    }

    #[test]
    fn test_resolve_id_by_label() {
        let engine = PreferenceScoringEngine::default();
        assert_eq!(engine.resolve_id("Chemical"), Some("chemical"));
        assert_eq!(engine.resolve_id("electrical"), Some("electrical"));
        assert_eq!(engine.resolve_id("nuclear"), None);
    }

    #[test]
    fn test_reset_after_moves() {
        let engine = PreferenceScoringEngine::default();
        let shuffled = engine
            .reorder(&engine.reset_order(), "chemical", "civil")
            .into_order()
            .moved("software", "electrical");
        assert_ne!(shuffled, engine.reset_order());
        assert_eq!(engine.reset_order(), PreferenceOrder::from_catalog(engine.catalog()));
    }
}
