//! Department model

use serde::{Deserialize, Serialize};

/// A department the applicant can rank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department {
    /// Stable unique identifier, used as the reorder key (e.g., "civil")
    pub id: String,

    /// Full name shown to the user (e.g., "SCEE (Civil)")
    pub display_name: String,

    /// Abbreviation shown in compact views (e.g., "Civil")
    pub short_label: String,
}

impl Department {
    /// Create a new department
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `display_name` - Full name
    /// * `short_label` - Compact label
    #[must_use]
    pub fn new(id: &str, display_name: &str, short_label: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            short_label: short_label.to_string(),
        }
    }

    /// Returns `true` if `query` names this department by id or label (case-insensitive)
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.id.eq_ignore_ascii_case(query) || self.short_label.eq_ignore_ascii_case(query)
    }
}

/// The CTBE department catalog in its default preference order.
///
/// Ids are unique; only the order of these entries is ever mutated.
#[must_use]
pub fn default_catalog() -> Vec<Department> {
    vec![
        Department::new("civil", "SCEE (Civil)", "Civil"),
        Department::new("electrical", "SECE (Electrical)", "Electrical"),
        Department::new("biomedical", "CBME (Biomedical)", "Biomedical"),
        Department::new("software", "SiTE (Software)", "Software"),
        Department::new("mechanical", "SMiE (Mechanical)", "Mechanical"),
        Department::new("chemical", "SCBE (Chemical)", "Chemical"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_unique_ids() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);

        let ids: HashSet<_> = catalog.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_starts_with_civil() {
        let catalog = default_catalog();
        assert_eq!(catalog[0].id, "civil");
        assert_eq!(catalog[0].display_name, "SCEE (Civil)");
        assert_eq!(catalog[5].short_label, "Chemical");
    }

    #[test]
    fn test_matches_id_or_label() {
        let dept = Department::new("software", "SiTE (Software)", "Software");
        assert!(dept.matches("software"));
        assert!(dept.matches("SOFTWARE "));
        assert!(!dept.matches("site"));
    }
}
