//! Timeline client — fetches the visit event history from the
//! coordination backend.
//!
//! One read per page load: `GET /api/patients/timeline/{patientId}`,
//! optionally scoped to a specific visit log. There is no retry at this
//! layer — recovery is a user-initiated reload. A request superseded
//! before it resolves is discarded via [`RequestTracker`] rather than
//! applied, so navigating away can never paint a stale timeline.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::config;
use crate::models::VisitTimeline;

/// Errors from timeline fetches. None of these are retried here.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Cannot reach timeline service at {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Timeline service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse timeline response: {0}")]
    ResponseParsing(String),
}

/// HTTP client for the patient timeline endpoint.
pub struct TimelineClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl TimelineClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client with the default request timeout.
    pub fn with_default_timeout(base_url: &str) -> Self {
        Self::new(base_url, config::DEFAULT_TIMEOUT_SECS)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the event history for a patient's current (or most recent)
    /// visit, or for a specific visit log when `visit_log_id` is given.
    pub async fn fetch_timeline(
        &self,
        patient_id: &str,
        visit_log_id: Option<&str>,
    ) -> Result<VisitTimeline, FetchError> {
        let url = format!("{}/api/patients/timeline/{}", self.base_url, patient_id);

        let mut request = self.client.get(&url);
        if let Some(id) = visit_log_id {
            request = request.query(&[("visitLogId", id)]);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let mapped = if e.is_connect() {
                    FetchError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    FetchError::Timeout(self.timeout_secs)
                } else {
                    FetchError::Http(e.to_string())
                };
                tracing::warn!(patient_id, error = %mapped, "Timeline fetch failed");
                return Err(mapped);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(patient_id, status = status.as_u16(), "Timeline fetch failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::ResponseParsing(e.to_string()))
    }

    /// Fetch under a tracker: if a newer request began while this one was
    /// in flight, the outcome — success or failure — is discarded and
    /// `Ok(None)` is returned instead.
    pub async fn fetch_timeline_tracked(
        &self,
        tracker: &RequestTracker,
        patient_id: &str,
        visit_log_id: Option<&str>,
    ) -> Result<Option<VisitTimeline>, FetchError> {
        let token = tracker.begin();
        let result = self.fetch_timeline(patient_id, visit_log_id).await;

        if !tracker.is_current(&token) {
            tracing::debug!(patient_id, "Discarding stale timeline response");
            return Ok(None);
        }

        result.map(Some)
    }
}

// ── Stale-response protection ──────────────────────────────────────────────

/// Generation counter guarding against stale responses.
///
/// Each fetch begins a new generation; a token stays current only until
/// the next `begin()`. When the identifying parameters change before a
/// fetch resolves (navigation away), the in-flight result must be
/// discarded, not applied.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new request generation, invalidating all earlier tokens.
    pub fn begin(&self) -> RequestToken {
        RequestToken {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Is this token still the newest generation?
    pub fn is_current(&self, token: &RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation
    }
}

/// Token identifying one fetch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

// ── Tests ──────────────────────────────────────────────────────────────────
