use crate::client::{AnalyticsService, ChatService, ClientBuilder, KeysService};
use crate::config::Config;
use crate::transport::HttpTransport;
use crate::Result;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Synqly API client.
///
/// Immutable after construction. Cloning is cheap and every clone shares the
/// same connection pool, so one instance can serve many concurrent tasks.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    transport: Arc<HttpTransport>,
    chat: ChatService,
    analytics: AnalyticsService,
    keys: KeysService,
}

impl Client {
    /// Create a client from a configuration. The base URL is resolved first.
    pub fn new(config: Config) -> Result<Self> {
        let config = config.resolve();
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self {
            chat: ChatService::new(transport.clone()),
            analytics: AnalyticsService::new(transport.clone()),
            keys: KeysService::new(transport.clone()),
            transport,
            config,
        })
    }

    /// Create a client from `SYNQLY_API_KEY` / `SYNQLY_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    pub fn analytics(&self) -> &AnalyticsService {
        &self.analytics
    }

    pub fn keys(&self) -> &KeysService {
        &self.keys
    }

    /// Call an arbitrary endpoint through the same pipeline the façades use.
    ///
    /// `path` is normalized under `/api/v1` when it is not already rooted there.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.transport.execute(method, path, body).await
    }
}
