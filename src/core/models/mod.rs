//! Data models for `deptadvisor`

pub mod cutoff;
pub mod department;
pub mod recommendation;
pub mod testimonial;

pub use cutoff::CutoffRecord;
pub use department::{default_catalog, Department};
pub use recommendation::{sort_by_match, MatchTier, Recommendation};
pub use testimonial::Testimonial;
