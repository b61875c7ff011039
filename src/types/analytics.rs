//! Analytics query parameters and typed usage statistics.

use super::{null_as_default, Payload};
use serde::{Deserialize, Serialize};

/// Filters for the usage report. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub provider: Option<String>,
}

impl UsageParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Aggregated usage for an API key.
///
/// Fields the service adds beyond these totals are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_requests: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cached_requests: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_cost: f64,
    #[serde(flatten)]
    pub extra: Payload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn usage_stats_keeps_unknown_fields() {
        let stats: UsageStats = serde_json::from_value(json!({
            "totalRequests": 12,
            "totalTokens": 3400,
            "totalCost": 0.42,
            "byProvider": {"openai": 10, "anthropic": 2}
        }))
        .unwrap();
        assert_eq!(stats.total_requests, 12);
        assert_eq!(stats.total_tokens, 3400);
        assert_eq!(stats.cached_requests, 0);
        assert_eq!(stats.extra["byProvider"]["openai"], 10);
    }

    #[test]
    fn usage_stats_null_totals_are_zero() {
        let stats: UsageStats = serde_json::from_value(json!({
            "totalRequests": 2,
            "totalTokens": null,
            "totalCost": null
        }))
        .unwrap();
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.total_tokens, 0);
        assert_eq!(stats.total_cost, 0.0);
        assert!(stats.extra.is_empty());
    }
}
