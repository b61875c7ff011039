use crate::transport::HttpTransport;
use crate::types::chat::{ApiResponse, ChatCreateParams, ChatResponse};
use crate::{ApiError, Result};
use reqwest::Method;
use std::sync::Arc;

const CREATE_CHAT_PATH: &str = "/chat/create-chat";

/// Chat completion operations.
#[derive(Debug, Clone)]
pub struct ChatService {
    transport: Arc<HttpTransport>,
}

impl ChatService {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a chat completion.
    ///
    /// Fails with status 400 before any network call when `model` is blank or
    /// `messages` is empty. An HTTP 2xx whose envelope reports
    /// `success: false` fails with status 500 and the envelope's message.
    pub async fn create(&self, params: &ChatCreateParams) -> Result<ChatResponse> {
        validate(params)?;

        let envelope: ApiResponse<ChatResponse> = self
            .transport
            .execute(Method::POST, CREATE_CHAT_PATH, Some(params))
            .await?;

        if !envelope.success {
            return Err(ApiError::envelope(envelope.message));
        }

        envelope
            .data
            .ok_or_else(|| ApiError::decode("response envelope reported success without data"))
    }
}

fn validate(params: &ChatCreateParams) -> Result<()> {
    if params.model.trim().is_empty() {
        return Err(ApiError::validation("model is required"));
    }
    if params.messages.is_empty() {
        return Err(ApiError::validation("messages cannot be empty"));
    }
    Ok(())
}
