use crate::config::{Config, API_KEY_HEADER, API_PREFIX, REQUEST_TIMEOUT};
use crate::{ApiError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Placeholder body for requests that carry none.
pub(crate) const NO_BODY: Option<&()> = None;

/// Shared HTTP transport.
///
/// Holds the resolved base URL, the API key and one pooled `reqwest::Client`
/// with a fixed timeout. It carries no per-call state and is safe to share
/// across tasks.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let config = config.clone().resolve();
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Issue a request and decode the JSON response body into `T`.
    pub async fn execute<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, body).await?;
        let text = response.text().await?;
        let value = serde_json::from_str(&text)?;
        Ok(value)
    }

    /// Issue a request whose response body is not needed.
    ///
    /// The status is still checked; the body is only read on failure.
    pub async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body).await.map(|_| ())
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, normalize_path(path));

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| {
                ApiError::serialization(format!("failed to marshal request: {}", e))
            })?;
            request = request.body(bytes);
        }

        debug!(method = %method, url = %url, "sending request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!(method = %method, url = %url, status, "received response");

        if status >= 400 {
            // The raw body is the most detailed diagnostic the server offers.
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status, body));
        }

        Ok(response)
    }
}

/// Ensure a single leading slash and root the path under [`API_PREFIX`].
pub fn normalize_path(path: &str) -> String {
    let path = format!("/{}", path.trim_start_matches('/'));
    let rooted = path == API_PREFIX
        || path
            .strip_prefix(API_PREFIX)
            .map(|rest| rest.starts_with('/') || rest.starts_with('?'))
            .unwrap_or(false);
    if rooted {
        path
    } else {
        format!("{}{}", API_PREFIX, path)
    }
}

/// Append the present, non-empty parameters to `path` in the given order.
pub fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for &(name, value) in params {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            query.append_pair(name, value);
            any = true;
        }
    }
    if any {
        format!("{}?{}", path, query.finish())
    } else {
        path.to_string()
    }
}

/// Percent-encode a single path segment.
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
