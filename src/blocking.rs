//! Synchronous wrapper around the async [`Client`](crate::Client).
//!
//! Each call blocks the calling thread until the exchange completes or the
//! fixed timeout elapses. The wrapper owns a private single-worker tokio
//! runtime, so it must not be used from inside another async runtime.

use crate::config::Config;
use crate::types::analytics::{UsageParams, UsageStats};
use crate::types::chat::{ChatCreateParams, ChatResponse};
use crate::types::keys::CreateKeyParams;
use crate::types::Payload;
use crate::{ApiError, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Runtime;

/// Blocking Synqly client. `Send + Sync`; share it behind an `Arc`.
///
/// # Panics
///
/// Calling any method, or dropping the client, from inside an async runtime
/// panics: the client owns its own tokio runtime, which cannot block or shut
/// down on an async worker thread. Create and drop it on plain threads.
#[derive(Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("synqly-blocking")
            .enable_all()
            .build()
            .map_err(|e| ApiError::transport(format!("failed to start runtime: {}", e)))?;
        let inner = {
            let _guard = runtime.enter();
            crate::Client::new(config)?
        };
        Ok(Self { inner, runtime })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn api_key(&self) -> &str {
        self.inner.api_key()
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    pub fn analytics(&self) -> Analytics<'_> {
        Analytics { client: self }
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys { client: self }
    }

    pub fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.runtime.block_on(self.inner.request(method, path, body))
    }
}

pub struct Chat<'a> {
    client: &'a Client,
}

impl Chat<'_> {
    pub fn create(&self, params: &ChatCreateParams) -> Result<ChatResponse> {
        self.client
            .runtime
            .block_on(self.client.inner.chat().create(params))
    }
}

pub struct Analytics<'a> {
    client: &'a Client,
}

impl Analytics<'_> {
    pub fn usage(&self, params: &UsageParams) -> Result<UsageStats> {
        self.client
            .runtime
            .block_on(self.client.inner.analytics().usage(params))
    }

    pub fn costs(&self, start_date: Option<&str>, end_date: Option<&str>) -> Result<Payload> {
        self.client
            .runtime
            .block_on(self.client.inner.analytics().costs(start_date, end_date))
    }

    pub fn latency(&self, provider: Option<&str>) -> Result<Payload> {
        self.client
            .runtime
            .block_on(self.client.inner.analytics().latency(provider))
    }
}

pub struct Keys<'a> {
    client: &'a Client,
}

impl Keys<'_> {
    pub fn create(&self, params: &CreateKeyParams) -> Result<Payload> {
        self.client
            .runtime
            .block_on(self.client.inner.keys().create(params))
    }

    pub fn list(&self, email: &str) -> Result<Payload> {
        self.client
            .runtime
            .block_on(self.client.inner.keys().list(email))
    }

    pub fn delete(&self, key_id: &str, email: &str) -> Result<Payload> {
        self.client
            .runtime
            .block_on(self.client.inner.keys().delete(key_id, email))
    }
}
