use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Order,
    error::FetchError,
    protocol::{ApiErrorBody, OrderListResponse},
};
use tracing::{debug, warn};

pub mod filter;
pub mod metrics;

pub use filter::{filter_orders, StatusFilter};
pub use metrics::{
    ActivityEntry, ActivityKind, ComputedOrderMetrics, FixtureMetrics, MetricCard,
    MetricsProvider, OrderStats, ProductionPoint, SeriesPoint,
};

/// One-shot retrieval state for a page-owned collection. Terminal on the
/// first response; a new page activation starts over at `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Seam for the order-listing retrieval so UI plumbing can be exercised
/// against fakes.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError>;
}

/// HTTP client for the remote `bedquest-api` service.
pub struct OrdersApi {
    http: Client,
    api_url: String,
}

impl OrdersApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
        }
    }

    fn orders_endpoint(&self) -> String {
        format!("{}/orders.php", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl OrderSource for OrdersApi {
    async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError> {
        let endpoint = self.orders_endpoint();
        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The API sends { "message": ... } alongside error statuses; fall
            // back to a generic message when the body is something else.
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| "Failed to fetch orders".to_string());
            warn!(status = status.as_u16(), "order fetch rejected: {message}");
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: OrderListResponse = response
            .json()
            .await
            .map_err(|err| FetchError::MalformedResponse(err.to_string()))?;
        debug!(count = body.data.len(), "order fetch succeeded");
        Ok(body.data)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
