//! Preference order and the move-entry-to-position relocation

use crate::core::models::Department;
use serde::{Deserialize, Serialize};

/// Anything that can be located in an order by a string key.
pub trait Keyed {
    /// The reorder key
    fn key(&self) -> &str;
}

impl Keyed for Department {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

impl Keyed for &str {
    fn key(&self) -> &str {
        self
    }
}

/// Move the entry keyed `moved_id` into the slot held by `target_id`.
///
/// Both positions are looked up before anything moves; the moved entry is
/// spliced out and re-inserted at the target's original index, so entries
/// between the two positions shift by one slot and everything else stays put.
///
/// Returns an unchanged copy when either key is absent or the keys are equal.
#[must_use]
pub fn reorder<T: Keyed + Clone>(order: &[T], moved_id: &str, target_id: &str) -> Vec<T> {
    let mut next = order.to_vec();
    if moved_id == target_id {
        return next;
    }

    let moved_index = order.iter().position(|entry| entry.key() == moved_id);
    let target_index = order.iter().position(|entry| entry.key() == target_id);

    if let (Some(from), Some(to)) = (moved_index, target_index) {
        let entry = next.remove(from);
        next.insert(to, entry);
    }
    next
}

/// The applicant's ranked list of departments; index 0 is the first choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceOrder {
    entries: Vec<Department>,
}

impl PreferenceOrder {
    /// Create an order from a catalog, keeping the catalog's sequence
    #[must_use]
    pub fn from_catalog(catalog: &[Department]) -> Self {
        Self {
            entries: catalog.to_vec(),
        }
    }

    /// Departments in rank order
    #[must_use]
    pub fn entries(&self) -> &[Department] {
        &self.entries
    }

    /// Department ids in rank order
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.id.as_str()).collect()
    }

    /// Number of ranked departments
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is ranked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1-based rank of a department id, if present
    #[must_use]
    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|d| d.id == id)
            .map(|index| index + 1)
    }

    /// A new order with `moved_id` relocated into `target_id`'s slot.
    ///
    /// See [`reorder`]; unknown or identical ids yield an equal order.
    #[must_use]
    pub fn moved(&self, moved_id: &str, target_id: &str) -> Self {
        Self {
            entries: reorder(&self.entries, moved_id, target_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::default_catalog;

    fn catalog_order() -> PreferenceOrder {
        PreferenceOrder::from_catalog(&default_catalog())
    }

    #[test]
    fn test_move_up_into_target_slot() {
        let order = catalog_order().moved("chemical", "electrical");
        assert_eq!(
            order.ids(),
            vec!["civil", "chemical", "electrical", "biomedical", "software", "mechanical"]
        );
    }

    #[test]
    fn test_move_down_takes_target_index() {
        let order = catalog_order().moved("civil", "biomedical");
        assert_eq!(
            order.ids(),
            vec!["electrical", "biomedical", "civil", "software", "mechanical", "chemical"]
        );
        assert_eq!(order.rank_of("civil"), Some(3));
    }

    #[test]
    fn test_move_to_last_slot() {
        let order = catalog_order().moved("civil", "chemical");
        assert_eq!(order.rank_of("civil"), Some(6));
        assert_eq!(order.rank_of("electrical"), Some(1));
    }

    #[test]
    fn test_noop_cases() {
        let order = catalog_order();
        assert_eq!(order.moved("civil", "civil"), order);
        assert_eq!(order.moved("nuclear", "civil"), order);
        assert_eq!(order.moved("civil", "nuclear"), order);
    }

    #[test]
    fn test_reorder_plain_keys() {
        let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(reorder(&keys, "c", "a"), vec!["c", "a", "b"]);
        assert_eq!(reorder(&keys, "a", "b"), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reorder_preserves_entries() {
        let catalog = default_catalog();
        let ids: Vec<&str> = catalog.iter().map(|d| d.id.as_str()).collect();
        for moved in &ids {
            for target in &ids {
                let next = reorder(&catalog, moved, target);
                assert_eq!(next.len(), catalog.len());
                let mut sorted_next: Vec<_> = next.iter().map(|d| d.id.clone()).collect();
                let mut sorted_catalog: Vec<_> = catalog.iter().map(|d| d.id.clone()).collect();
                sorted_next.sort();
                sorted_catalog.sort();
                assert_eq!(sorted_next, sorted_catalog);
            }
        }
    }

    #[test]
    fn test_entries_outside_span_unaffected() {
        let before = catalog_order();
        let after = before.moved("software", "electrical");
        assert_eq!(after.entries()[0], before.entries()[0]);
        assert_eq!(after.entries()[4], before.entries()[4]);
        assert_eq!(after.entries()[5], before.entries()[5]);
        assert_eq!(after.ids()[1..4], ["software", "electrical", "biomedical"]);
    }
}
