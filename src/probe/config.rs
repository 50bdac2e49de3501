//! Probe request configuration.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::{ProbeError, Result};

/// Insights endpoint probed when no `--url` is given.
pub const DEFAULT_ENDPOINT: &str = "https://quest-api-edz1.onrender.com/api/v1/insights/";

/// User whose insights are listed when no `--user-id` is given.
pub const DEFAULT_USER_ID: &str = "be91dade-1872-444d-b0e7-185ff7e0545a";

/// Request timeout when no `--timeout` is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Query parameters sent with the probe request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    /// Page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// User identifier.
    pub user_id: String,
    /// Ask the API to embed tags in each insight.
    pub include_tags: bool,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 5,
            user_id: DEFAULT_USER_ID.to_string(),
            include_tags: true,
        }
    }
}

impl QueryParams {
    /// Ordered `(key, value)` pairs as they appear in the query string.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("user_id", self.user_id.clone()),
            ("include_tags", self.include_tags.to_string()),
        ]
    }
}

/// Renders as `{'page': 1, 'limit': 5, 'user_id': '...', 'include_tags': 'true'}`.
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'page': {}, 'limit': {}, 'user_id': '{}', 'include_tags': '{}'}}",
            self.page, self.limit, self.user_id, self.include_tags
        )
    }
}

/// Everything needed to issue the probe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Endpoint URL, without query string.
    pub endpoint: String,
    /// Query parameters.
    pub params: QueryParams,
    /// Upper bound for the whole request.
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            params: QueryParams::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    /// Create a config for `endpoint` with the default parameters and timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Replace the query parameters.
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The endpoint with the query string appended.
    pub fn request_url(&self) -> Result<reqwest::Url> {
        reqwest::Url::parse_with_params(&self.endpoint, self.params.pairs()).map_err(|e| {
            ProbeError::InvalidUrl {
                url: self.endpoint.clone(),
                message: e.to_string(),
            }
        })
    }
}
