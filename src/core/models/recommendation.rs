//! Recommendation model

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A recommended department with its match score and GPA cutoff
///
/// The match percentage is supplied by the backend (or the sample payload);
/// it is never computed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Identifier assigned by the backend
    pub id: String,

    /// Department name (e.g., "Data Science")
    pub name: String,

    /// Short description of the programme
    pub description: String,

    /// Match between the applicant profile and the department, 0-100
    pub match_percentage: f64,

    /// GPA cutoff for admission
    pub cutoff: f64,
}

/// Strength of a recommendation match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// 90% and above
    Excellent,
    /// 75% up to 90%
    Strong,
    /// 60% up to 75%
    Moderate,
    /// Below 60%
    Low,
}

impl MatchTier {
    /// Classify a match percentage
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= 75.0 {
            Self::Strong
        } else if percentage >= 60.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "excellent"),
            Self::Strong => write!(f, "strong"),
            Self::Moderate => write!(f, "moderate"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl Recommendation {
    /// Match tier for this recommendation
    #[must_use]
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_percentage(self.match_percentage)
    }
}

/// Sort by match percentage, highest first; equal matches keep their order
pub fn sort_by_match<R: Borrow<Recommendation>>(recommendations: &mut [R]) {
    recommendations.sort_by(|a, b| {
        let (a, b): (&Recommendation, &Recommendation) = (a.borrow(), b.borrow());
        b.match_percentage.total_cmp(&a.match_percentage)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MatchTier::from_percentage(95.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_percentage(90.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_percentage(89.9), MatchTier::Strong);
        assert_eq!(MatchTier::from_percentage(75.0), MatchTier::Strong);
        assert_eq!(MatchTier::from_percentage(60.0), MatchTier::Moderate);
        assert_eq!(MatchTier::from_percentage(59.0), MatchTier::Low);
    }

    #[test]
    fn test_sort_by_match_is_stable() {
        let rec = |id: &str, pct: f64| Recommendation {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            match_percentage: pct,
            cutoff: 3.0,
        };
        let mut recs = vec![rec("a", 70.0), rec("b", 92.0), rec("c", 70.0), rec("d", 81.0)];
        sort_by_match(&mut recs);
        let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id":"1","name":"Computer Science","description":"d","matchPercentage":95,"cutoff":3.6}"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.name, "Computer Science");
        assert!((rec.match_percentage - 95.0).abs() < f64::EPSILON);
        assert_eq!(rec.tier(), MatchTier::Excellent);
    }
}
