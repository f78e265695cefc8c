//! Backend API errors

use std::fmt;
use thiserror::Error;

/// Backend endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /submit-gpa`
    SubmitGpa,
    /// `POST /submit-interest-quiz`
    SubmitInterestQuiz,
    /// `GET /recommendations`
    Recommendations,
    /// `GET /cutoffs`
    Cutoffs,
    /// `GET /testimonials`
    Testimonials,
}

impl Endpoint {
    /// Path relative to the API base URL
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SubmitGpa => "/submit-gpa",
            Self::SubmitInterestQuiz => "/submit-interest-quiz",
            Self::Recommendations => "/recommendations",
            Self::Cutoffs => "/cutoffs",
            Self::Testimonials => "/testimonials",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Errors talking to the advisor backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        /// Endpoint being called
        endpoint: Endpoint,
        /// Underlying error text
        message: String,
    },

    /// The backend answered with a non-2xx status
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        /// Endpoint being called
        endpoint: Endpoint,
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body was not the expected JSON
    #[error("failed to decode {endpoint} response: {message}")]
    Decode {
        /// Endpoint being called
        endpoint: Endpoint,
        /// Decoder error text
        message: String,
    },

    /// The backend is disabled for this run
    #[error("backend disabled (offline mode)")]
    Offline,
}

/// Result alias for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
