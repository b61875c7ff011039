use crate::client::Client;
use crate::config::Config;
use crate::Result;

/// Builder for [`Client`].
///
/// Unset values fall back to `SYNQLY_API_KEY` / `SYNQLY_BASE_URL`, then to the
/// defaults applied by [`Config::resolve`].
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the service endpoint (mock servers, self-hosted deployments).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.api_key = Some(config.api_key);
        self.base_url = Some(config.base_url);
        self
    }

    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("SYNQLY_API_KEY").ok())
            .unwrap_or_default();
        let base_url = self
            .base_url
            .or_else(|| std::env::var("SYNQLY_BASE_URL").ok())
            .unwrap_or_default();
        Client::new(Config { api_key, base_url })
    }
}
