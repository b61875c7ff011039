//! Chat completion request, response and envelope types.

use super::message::Message;
use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Parameters for a chat completion.
///
/// Unset optional fields are omitted from the wire payload: the service
/// treats "absent" and "zero" differently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCreateParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(rename = "modelType")]
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Let the service route to an alternate provider on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCreateParams {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            ..Default::default()
        }
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn temperature(mut self, t: f64) -> Self {
        self.temperature = Some(t);
        self
    }

    pub fn max_tokens(mut self, n: u32) -> Self {
        self.max_tokens = Some(n);
        self
    }

    pub fn top_p(mut self, p: f64) -> Self {
        self.top_p = Some(p);
        self
    }

    pub fn fallback(mut self, enable: bool) -> Self {
        self.fallback = Some(enable);
        self
    }

    pub fn stream(mut self, enable: bool) -> Self {
        self.stream = Some(enable);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTokensDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub cached_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionTokensDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub reasoning_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub accepted_prediction_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub rejected_prediction_tokens: u64,
}

/// Token accounting for one completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens_details: PromptTokensDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens_details: CompletionTokensDetails,
}

/// Normalized completion, independent of the upstream provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(rename = "modelType", deserialize_with = "null_as_default")]
    pub model_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: UsageDetail,
    #[serde(deserialize_with = "null_as_default")]
    pub finish_reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    /// Served from the service's cache. Informational only.
    #[serde(deserialize_with = "null_as_default")]
    pub cached: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_hit: bool,
}

impl ChatResponse {
    /// The generated text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// `{success, message, data}` wrapper returned by chat endpoints.
///
/// `data` is absent or null when `success` is false.
/// Null scalar fields decode as their zero values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Missing or null reads as `false`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_optionals_are_omitted() {
        let params = ChatCreateParams::new("gpt-4", vec![Message::user("Hello")]);
        let json = serde_json::to_value(&params).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["provider", "temperature", "max_tokens", "top_p", "fallback", "stream"] {
            assert!(!obj.contains_key(key), "{} should be absent", key);
        }
        assert_eq!(obj["modelType"], "gpt-4");
        assert_eq!(obj["messages"], json!([{"role": "user", "content": "Hello"}]));
    }

    #[test]
    fn zero_values_are_sent_when_set() {
        let params = ChatCreateParams::new("gpt-4", vec![Message::user("Hi")])
            .provider("openai")
            .temperature(0.0)
            .max_tokens(0)
            .top_p(0.5)
            .fallback(false)
            .stream(false);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["provider"], "openai");
        assert_eq!(json["temperature"], json!(0.0));
        assert_eq!(json["max_tokens"], json!(0));
        assert_eq!(json["top_p"], json!(0.5));
        assert_eq!(json["fallback"], json!(false));
        assert_eq!(json["stream"], json!(false));
    }

    #[test]
    fn message_order_is_preserved() {
        let params = ChatCreateParams::new(
            "gpt-4",
            vec![
                Message::system("be brief"),
                Message::user("one"),
                Message::assistant("two"),
                Message::user("three"),
            ],
        );
        let json = serde_json::to_value(&params).unwrap();
        let contents: Vec<&str> = json["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["content"].as_str().unwrap())
            .collect();
        assert_eq!(contents, vec!["be brief", "one", "two", "three"]);
    }

    #[test]
    fn response_decodes_with_missing_fields() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "id": "test_1",
            "provider": "openai",
            "modelType": "gpt-4",
            "content": "hello"
        }))
        .unwrap();
        assert_eq!(resp.content(), "hello");
        assert_eq!(resp.usage, UsageDetail::default());
        assert!(!resp.cached);
    }

    #[test]
    fn usage_details_decode() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "content": "x",
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 5,
                "total_tokens": 15,
                "prompt_tokens_details": {"cached_tokens": 4},
                "completion_tokens_details": {"reasoning_tokens": 2}
            },
            "cached": true,
            "cache_hit": true
        }))
        .unwrap();
        assert_eq!(resp.usage.total_tokens, 15);
        assert_eq!(resp.usage.prompt_tokens_details.cached_tokens, 4);
        assert_eq!(resp.usage.prompt_tokens_details.audio_tokens, 0);
        assert_eq!(resp.usage.completion_tokens_details.reasoning_tokens, 2);
        assert!(resp.cached && resp.cache_hit);
    }

    #[test]
    fn envelope_with_null_data() {
        let env: ApiResponse<ChatResponse> =
            serde_json::from_value(json!({"success": false, "message": "nope", "data": null}))
                .unwrap();
        assert!(!env.success);
        assert_eq!(env.message, "nope");
        assert!(env.data.is_none());
    }

    #[test]
    fn null_fields_decode_as_zero_values() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "id": null,
            "content": "hello",
            "finish_reason": null,
            "usage": {"total_tokens": null, "prompt_tokens_details": null},
            "cached": null
        }))
        .unwrap();
        assert_eq!(resp.content(), "hello");
        assert_eq!(resp.id, "");
        assert_eq!(resp.finish_reason, "");
        assert_eq!(resp.usage, UsageDetail::default());
        assert!(!resp.cached);

        let resp: ChatResponse =
            serde_json::from_value(json!({"content": "x", "usage": null})).unwrap();
        assert_eq!(resp.usage, UsageDetail::default());
    }

    #[test]
    fn envelope_without_success_reads_as_failure() {
        let env: ApiResponse<ChatResponse> =
            serde_json::from_value(json!({"message": "provider down"})).unwrap();
        assert!(!env.success);
        assert_eq!(env.message, "provider down");

        let env: ApiResponse<ChatResponse> =
            serde_json::from_value(json!({"success": null, "message": null})).unwrap();
        assert!(!env.success);
        assert_eq!(env.message, "");
    }
}
