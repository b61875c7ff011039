use crate::transport::{encode_segment, HttpTransport, NO_BODY};
use crate::types::keys::{CreateKeyParams, DeleteKeyBody};
use crate::types::Payload;
use crate::Result;
use reqwest::Method;
use std::sync::Arc;

/// API key management. Thin pass-through, no local validation.
#[derive(Debug, Clone)]
pub struct KeysService {
    transport: Arc<HttpTransport>,
}

impl KeysService {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &CreateKeyParams) -> Result<Payload> {
        self.transport
            .execute(Method::POST, "/keys/create", Some(params))
            .await
    }

    /// List the keys owned by `email`. The parameter is always sent, even
    /// when empty.
    pub async fn list(&self, email: &str) -> Result<Payload> {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("email", email)
            .finish();
        let path = format!("/keys/list?{}", query);
        self.transport.execute(Method::GET, &path, NO_BODY).await
    }

    /// Delete a key. The owner's email travels in the request body.
    pub async fn delete(&self, key_id: &str, email: &str) -> Result<Payload> {
        let path = format!("/keys/{}", encode_segment(key_id));
        self.transport
            .execute(Method::DELETE, &path, Some(&DeleteKeyBody { email }))
            .await
    }
}
