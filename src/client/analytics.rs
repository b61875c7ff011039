use crate::transport::{with_query, HttpTransport, NO_BODY};
use crate::types::analytics::{UsageParams, UsageStats};
use crate::types::Payload;
use crate::Result;
use reqwest::Method;
use std::sync::Arc;

const USAGE_PATH: &str = "/analytics/usage";
const COSTS_PATH: &str = "/analytics/costs";
const LATENCY_PATH: &str = "/analytics/latency";

/// Read-only usage, cost and latency reports.
///
/// Query parameters are appended only when present and non-empty, always in
/// the order `startDate`, `endDate`, `provider`.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    transport: Arc<HttpTransport>,
}

impl AnalyticsService {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn usage(&self, params: &UsageParams) -> Result<UsageStats> {
        let path = with_query(
            USAGE_PATH,
            &[
                ("startDate", params.start_date.as_deref()),
                ("endDate", params.end_date.as_deref()),
                ("provider", params.provider.as_deref()),
            ],
        );
        self.transport.execute(Method::GET, &path, NO_BODY).await
    }

    pub async fn costs(&self, start_date: Option<&str>, end_date: Option<&str>) -> Result<Payload> {
        let path = with_query(
            COSTS_PATH,
            &[("startDate", start_date), ("endDate", end_date)],
        );
        self.transport.execute(Method::GET, &path, NO_BODY).await
    }

    pub async fn latency(&self, provider: Option<&str>) -> Result<Payload> {
        let path = with_query(LATENCY_PATH, &[("provider", provider)]);
        self.transport.execute(Method::GET, &path, NO_BODY).await
    }
}
