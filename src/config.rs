//! Client configuration and its resolution rules.

use std::env;
use std::time::Duration;

/// Canonical service endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.synqly.xyz";

/// Versioned prefix every request path is rooted under.
pub const API_PREFIX: &str = "/api/v1";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-synqly-key";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client configuration.
///
/// An empty `api_key` is accepted; the service reports it as an
/// authentication error on the first call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: String::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a configuration from `SYNQLY_API_KEY` and `SYNQLY_BASE_URL`.
    ///
    /// Unset variables become empty strings and are resolved like any other
    /// empty value.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("SYNQLY_API_KEY").unwrap_or_default(),
            base_url: env::var("SYNQLY_BASE_URL").unwrap_or_default(),
        }
        .resolve()
    }

    /// Apply the default endpoint and strip trailing slashes.
    pub fn resolve(self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            api_key: self.api_key,
            base_url,
        }
    }
}
