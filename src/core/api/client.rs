//! Blocking HTTP client for the advisor backend
//!
//! Uses ureq (sync HTTP); the CLI never needs an async runtime.

use super::error::{ApiError, ApiResult, Endpoint};
use super::AdvisorApi;
use crate::core::config::ApiConfig;
use crate::core::models::{CutoffRecord, Recommendation, Testimonial};
use crate::core::quiz::QuizAnswers;
use crate::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct RecommendationsEnvelope {
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

#[derive(Deserialize)]
struct CutoffsEnvelope {
    #[serde(default)]
    cutoffs: Vec<CutoffRecord>,
}

#[derive(Deserialize)]
struct TestimonialsEnvelope {
    #[serde(default)]
    testimonials: Vec<Testimonial>,
}

#[derive(Serialize)]
struct GpaSubmission {
    gpa: f64,
}

/// HTTP implementation of [`AdvisorApi`]
pub struct AdvisorClient {
    base_url: String,
    agent: ureq::Agent,
}

fn make_agent(timeout: Duration) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // status codes are mapped to ApiError::Status below
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

impl AdvisorClient {
    /// Create a client for `base_url` (trailing slashes are ignored)
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let base_url = base_url.trim().trim_end_matches('/');
        Self {
            base_url: if base_url.is_empty() {
                DEFAULT_BASE_URL.to_string()
            } else {
                base_url.to_string()
            },
            agent: make_agent(timeout),
        }
    }

    /// Create a client from the `[api]` config section
    #[must_use]
    pub fn from_config(api: &ApiConfig) -> Self {
        let timeout = if api.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(api.timeout_secs)
        };
        Self::new(&api.base_url, timeout)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint
    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let url = self.url(endpoint);
        debug!("GET {url}");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| ApiError::Transport {
                endpoint,
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(ApiError::Status {
                endpoint,
                status,
                body,
            });
        }

        response
            .into_body()
            .read_json::<T>()
            .map_err(|e| ApiError::Decode {
                endpoint,
                message: e.to_string(),
            })
    }

    fn post_json<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> ApiResult<()> {
        let url = self.url(endpoint);
        debug!("POST {url}");

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| ApiError::Transport {
                endpoint,
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            let body = response.into_body().read_to_string().unwrap_or_default();
            Err(ApiError::Status {
                endpoint,
                status,
                body,
            })
        }
    }
}

impl AdvisorApi for AdvisorClient {
    fn submit_gpa(&self, gpa: f64) -> ApiResult<()> {
        self.post_json(Endpoint::SubmitGpa, &GpaSubmission { gpa })
    }

    fn submit_interest_quiz(&self, answers: &QuizAnswers) -> ApiResult<()> {
        self.post_json(Endpoint::SubmitInterestQuiz, answers)
    }

    fn recommendations(&self) -> ApiResult<Vec<Recommendation>> {
        self.get_json::<RecommendationsEnvelope>(Endpoint::Recommendations)
            .map(|envelope| envelope.recommendations)
    }

    fn cutoffs(&self) -> ApiResult<Vec<CutoffRecord>> {
        self.get_json::<CutoffsEnvelope>(Endpoint::Cutoffs)
            .map(|envelope| envelope.cutoffs)
    }

    fn testimonials(&self) -> ApiResult<Vec<Testimonial>> {
        self.get_json::<TestimonialsEnvelope>(Endpoint::Testimonials)
            .map(|envelope| envelope.testimonials)
    }
}
