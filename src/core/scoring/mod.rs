//! GPA-to-admission-percentage calculator with a reorderable preference list

pub mod engine;
pub mod formula;
pub mod order;
pub mod table;

pub use engine::{EngineOptions, PreferenceScoringEngine, ReorderOutcome};
pub use formula::{
    compute_base_percentage, compute_percentage, compute_preference_bonus, is_valid_gpa, parse_gpa,
};
pub use order::{reorder, Keyed, PreferenceOrder};
pub use table::{format_percentage, ordinal, Highlight, ScoreRow, FORMULA_LEGEND, STRATEGIC_TIP};
