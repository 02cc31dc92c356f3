//! Light Rail schedule HTTP client.
//!
//! Provides async access to the MTR Light Rail next-train API on the
//! Hong Kong government open-data platform. No authentication is
//! required; the station id is the sole query parameter.

use crate::domain::{ScheduleSnapshot, StationId};

use super::convert::snapshot_from_response;
use super::error::ApiError;
use super::source::ScheduleSource;
use super::types::ScheduleResponse;

/// Default base URL for the Light Rail schedule API.
const DEFAULT_BASE_URL: &str = "https://rt.data.gov.hk/v1/transport/mtr/lrt/getSchedule";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Light Rail client.
#[derive(Debug, Clone)]
pub struct LrtConfig {
    /// Base URL for the API (defaults to the production endpoint)
    pub base_url: String,
    /// Request timeout in seconds, covering the whole request/response cycle
    pub timeout_secs: u64,
}

impl LrtConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for LrtConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Light Rail schedule API client.
///
/// Cheap to clone; no per-call state. Safe to invoke repeatedly or
/// concurrently for different stations. Performs exactly one outbound
/// request per call, with no retries and no caching.
#[derive(Debug, Clone)]
pub struct LrtClient {
    http: reqwest::Client,
    base_url: String,
}

impl LrtClient {
    /// Create a new client with the given configuration.
    pub fn new(config: LrtConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Get the schedule for a station.
    ///
    /// Returns the full error taxonomy; use the [`ScheduleSource`]
    /// impl when only success versus absence matters.
    pub async fn get_schedule(
        &self,
        station: &StationId,
    ) -> Result<ScheduleSnapshot, ApiError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("station_id", station.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let decoded: ScheduleResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(snapshot_from_response(decoded))
    }
}

impl ScheduleSource for LrtClient {
    /// Fetch a schedule, collapsing every failure to `None`.
    ///
    /// The underlying diagnostic is logged at `warn` level; callers
    /// only learn success versus absence.
    async fn fetch(&self, station: &StationId) -> Option<ScheduleSnapshot> {
        match self.get_schedule(station).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(station = %station, error = %e, "schedule fetch failed");
                None
            }
        }
    }
}
