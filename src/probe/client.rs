//! Blocking HTTP client for the probe request.
//!
//! This module sends the single GET request described by a
//! [`ProbeConfig`] and captures the raw response.

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::{ProbeError, Result};

use super::config::ProbeConfig;

/// User agent sent with every probe request.
const USER_AGENT: &str = concat!("insight-probe/", env!("CARGO_PKG_VERSION"));

/// Raw response captured from the probe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Time from sending the request to reading the full body.
    pub elapsed: Duration,
}

impl ProbeResponse {
    /// Create a response with no headers and zero elapsed time.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: None,
            elapsed: Duration::ZERO,
        }
    }
}

/// Sends the probe request.
///
/// # Example
///
/// ```no_run
/// use insight_probe::probe::{ApiProbe, ProbeConfig};
///
/// let probe = ApiProbe::new(ProbeConfig::default()).unwrap();
/// let response = probe.send().unwrap();
/// println!("{}", response.status);
/// ```
pub struct ApiProbe {
    config: ProbeConfig,
    client: reqwest::blocking::Client,
}

impl ApiProbe {
    /// Create a probe whose client enforces the configured timeout.
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(ProbeError::ClientBuild)?;

        Ok(Self { config, client })
    }

    /// Send the request once. No retries.
    pub fn send(&self) -> Result<ProbeResponse> {
        let url = self.config.request_url()?;
        debug!(%url, timeout_ms = self.config.timeout.as_millis() as u64, "Sending probe request");

        let started = Instant::now();
        let response = self.client.get(url).send()?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text()?;
        let elapsed = started.elapsed();

        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Probe response received"
        );

        Ok(ProbeResponse {
            status,
            body,
            content_type,
            elapsed,
        })
    }
}
