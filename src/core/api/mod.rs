//! Advisor backend access
//!
//! [`AdvisorApi`] is the seam between the CLI and the backend. [`AdvisorClient`]
//! talks HTTP; [`OfflineBackend`] refuses every call so `--offline` runs go
//! straight to sample data. [`AdvisorData`] wraps either one and applies the
//! sample-data fallback to read-only endpoints.

pub mod client;
pub mod error;

pub use client::{AdvisorClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiResult, Endpoint};

use crate::core::models::{CutoffRecord, Recommendation, Testimonial};
use crate::core::quiz::QuizAnswers;
use crate::core::samples;
use crate::warn;
use std::fmt;

/// Operations offered by the advisor backend
pub trait AdvisorApi {
    /// Record a student's GPA
    ///
    /// # Errors
    /// Returns an error if the request fails or is rejected
    fn submit_gpa(&self, gpa: f64) -> ApiResult<()>;

    /// Record interest-quiz answers keyed by question id
    ///
    /// # Errors
    /// Returns an error if the request fails or is rejected
    fn submit_interest_quiz(&self, answers: &QuizAnswers) -> ApiResult<()>;

    /// Department recommendations for the current student
    ///
    /// # Errors
    /// Returns an error if the request fails or the payload is malformed
    fn recommendations(&self) -> ApiResult<Vec<Recommendation>>;

    /// Historical cutoff records
    ///
    /// # Errors
    /// Returns an error if the request fails or the payload is malformed
    fn cutoffs(&self) -> ApiResult<Vec<CutoffRecord>>;

    /// Alumni testimonials
    ///
    /// # Errors
    /// Returns an error if the request fails or the payload is malformed
    fn testimonials(&self) -> ApiResult<Vec<Testimonial>>;
}

/// Backend that is never reachable
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

impl AdvisorApi for OfflineBackend {
    fn submit_gpa(&self, _gpa: f64) -> ApiResult<()> {
        Err(ApiError::Offline)
    }

    fn submit_interest_quiz(&self, _answers: &QuizAnswers) -> ApiResult<()> {
        Err(ApiError::Offline)
    }

    fn recommendations(&self) -> ApiResult<Vec<Recommendation>> {
        Err(ApiError::Offline)
    }

    fn cutoffs(&self) -> ApiResult<Vec<CutoffRecord>> {
        Err(ApiError::Offline)
    }

    fn testimonials(&self) -> ApiResult<Vec<Testimonial>> {
        Err(ApiError::Offline)
    }
}

/// Where displayed data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The backend answered
    Live,
    /// Built-in sample data after a failed request
    Sample,
}

/// Notice shown alongside sample data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short heading
    pub title: String,
    /// One-line explanation
    pub description: String,
}

impl Notice {
    /// Notice for a read endpoint that fell back to sample `what`
    #[must_use]
    pub fn sample_data(what: &str) -> Self {
        Self {
            title: "Using Sample Data".to_string(),
            description: format!("Couldn't connect to the server. Showing sample {what}."),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Data plus its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    /// The payload
    pub data: T,
    /// Live or sample
    pub source: DataSource,
    /// Set when `source` is [`DataSource::Sample`]
    pub notice: Option<Notice>,
}

impl<T> Fetched<T> {
    /// Wrap a live payload
    pub const fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
            notice: None,
        }
    }

    /// Wrap a sample payload with its notice
    pub const fn sample(data: T, notice: Notice) -> Self {
        Self {
            data,
            source: DataSource::Sample,
            notice: Some(notice),
        }
    }

    /// Returns `true` if the payload is sample data
    pub fn is_sample(&self) -> bool {
        self.source == DataSource::Sample
    }
}

/// Resolve a read result, substituting `sample()` on failure when allowed
///
/// # Errors
/// Returns the original error when `fallback` is off
pub fn with_fallback<T>(
    result: ApiResult<T>,
    fallback: bool,
    what: &str,
    sample: impl FnOnce() -> T,
) -> ApiResult<Fetched<T>> {
    match result {
        Ok(data) => Ok(Fetched::live(data)),
        Err(err) if fallback => {
            warn!("{err}; showing sample {what}");
            Ok(Fetched::sample(sample(), Notice::sample_data(what)))
        }
        Err(err) => Err(err),
    }
}

/// Read access to the backend with sample-data fallback
pub struct AdvisorData<'a> {
    api: &'a dyn AdvisorApi,
    fallback: bool,
}

impl<'a> AdvisorData<'a> {
    /// Wrap `api`; `fallback` enables sample data on failure
    #[must_use]
    pub fn new(api: &'a dyn AdvisorApi, fallback: bool) -> Self {
        Self { api, fallback }
    }

    /// Underlying backend, for submissions (which never fall back)
    #[must_use]
    pub fn api(&self) -> &'a dyn AdvisorApi {
        self.api
    }

    /// Recommendations, or samples
    ///
    /// # Errors
    /// Returns the backend error when the request fails and fallback is off
    pub fn recommendations(&self) -> ApiResult<Fetched<Vec<Recommendation>>> {
        with_fallback(
            self.api.recommendations(),
            self.fallback,
            "recommendations",
            samples::recommendations,
        )
    }

    /// Cutoff history, or samples
    ///
    /// # Errors
    /// Returns the backend error when the request fails and fallback is off
    pub fn cutoffs(&self) -> ApiResult<Fetched<Vec<CutoffRecord>>> {
        with_fallback(
            self.api.cutoffs(),
            self.fallback,
            "cutoff data",
            samples::cutoffs,
        )
    }

    /// Testimonials, or samples
    ///
    /// # Errors
    /// Returns the backend error when the request fails and fallback is off
    pub fn testimonials(&self) -> ApiResult<Fetched<Vec<Testimonial>>> {
        with_fallback(
            self.api.testimonials(),
            self.fallback,
            "testimonials",
            samples::testimonials,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend;

    impl AdvisorApi for FixedBackend {
        fn submit_gpa(&self, _gpa: f64) -> ApiResult<()> {
            Ok(())
        }

        fn submit_interest_quiz(&self, _answers: &QuizAnswers) -> ApiResult<()> {
            Ok(())
        }

        fn recommendations(&self) -> ApiResult<Vec<Recommendation>> {
            Ok(Vec::new())
        }

        fn cutoffs(&self) -> ApiResult<Vec<CutoffRecord>> {
            Ok(vec![CutoffRecord::new(2024, "Robotics", 3.9)])
        }

        fn testimonials(&self) -> ApiResult<Vec<Testimonial>> {
            Err(ApiError::Status {
                endpoint: Endpoint::Testimonials,
                status: 500,
                body: String::new(),
            })
        }
    }

    #[test]
    fn test_live_data_passes_through() {
        let data = AdvisorData::new(&FixedBackend, true);
        let cutoffs = data.cutoffs().unwrap();
        assert_eq!(cutoffs.source, DataSource::Live);
        assert!(cutoffs.notice.is_none());
        assert_eq!(cutoffs.data[0].department, "Robotics");
    }

    #[test]
    fn test_empty_live_list_is_not_replaced() {
        let data = AdvisorData::new(&FixedBackend, true);
        let recs = data.recommendations().unwrap();
        assert!(!recs.is_sample());
        assert!(recs.data.is_empty());
    }

    #[test]
    fn test_status_error_falls_back() {
        let data = AdvisorData::new(&FixedBackend, true);
        let testimonials = data.testimonials().unwrap();
        assert!(testimonials.is_sample());
        assert_eq!(testimonials.data.len(), 8);
        let notice = testimonials.notice.unwrap();
        assert_eq!(notice.title, "Using Sample Data");
        assert_eq!(
            notice.description,
            "Couldn't connect to the server. Showing sample testimonials."
        );
    }

    #[test]
    fn test_fallback_disabled_returns_error() {
        let data = AdvisorData::new(&FixedBackend, false);
        assert!(matches!(
            data.testimonials(),
            Err(ApiError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_offline_backend_uses_samples() {
        let data = AdvisorData::new(&OfflineBackend, true);
        assert_eq!(data.recommendations().unwrap().data.len(), 5);
        assert_eq!(data.cutoffs().unwrap().data.len(), 20);
        assert!(matches!(
            data.api().submit_gpa(3.5),
            Err(ApiError::Offline)
        ));
    }
}
