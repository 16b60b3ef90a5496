//! Async counterpart of [`DashboardClient`](crate::DashboardClient) for use in
//! async runtimes (Tokio, etc.).
//!
//! Built on [`reqwest::Client`]. Each call is an independent future: several
//! calls may be in flight at once and complete in any order.
//!
//! # Example
//!
//! ```no_run
//! use restaurant_dashboard_sdk::{AsyncDashboardClient, TemporalFilter};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncDashboardClient::builder().build_async().unwrap();
//!     let filter = TemporalFilter::new();
//!
//!     let (cash, items) = tokio::join!(
//!         client.cash_flow_chart(&filter),
//!         client.top_items_chart(&filter),
//!     );
//! }
//! ```

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::{Endpoint, Method};
use crate::error::Result;
use crate::DashboardClientBuilder;

/// Async client for the dashboard analytics endpoints.
///
/// Same operations and error behavior as the blocking client. Created via
/// [`AsyncDashboardClient::builder()`] and
/// [`build_async()`](DashboardClientBuilder::build_async).
#[derive(Debug, Clone)]
pub struct AsyncDashboardClient {
    http: Client,
    base_url: String,
}

impl AsyncDashboardClient {
    pub(crate) fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Create a new builder; finish it with `build_async()`.
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `endpoint` and return its rows.
    ///
    /// `body` is sent as JSON for POST endpoints and ignored for GET ones.
    pub async fn fetch<B: Serialize + ?Sized>(&self, endpoint: Endpoint, body: &B) -> Result<Vec<Value>> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(method = %endpoint.method(), %url, "dashboard request");

        let request = match endpoint.method() {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url).json(body),
        };
        let resp = request.send().await?.error_for_status()?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let rows: Vec<Value> = serde_json::from_slice(&bytes)?;

        tracing::debug!(%url, %status, rows = rows.len(), "dashboard response");
        Ok(rows)
    }

    pub async fn cash_flow_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::CashFlowChart, filter).await
    }

    pub async fn delivery_locations_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::DeliveryLocationsChart, filter).await
    }

    pub async fn payments_by_type_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::PaymentsByTypeChart, filter).await
    }

    pub async fn performance_by_region_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::PerformanceByRegionChart, filter).await
    }

    pub async fn sales_by_channel_description_chart<B: Serialize + ?Sized>(
        &self,
        filter: &B,
    ) -> Result<Vec<Value>> {
        self.fetch(Endpoint::SalesByChannelDescriptionChart, filter).await
    }

    pub async fn top_items_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::TopItemsChart, filter).await
    }

    pub async fn customer_retention<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::CustomerRetention, filter).await
    }

    /// Average ticket per week. Rows are returned raw; there is no record type for them.
    pub async fn weekly_average_ticket(&self) -> Result<Vec<Value>> {
        self.fetch(Endpoint::WeeklyAverageTicket, &()).await
    }

    /// Revenue per week. Rows are returned raw; there is no record type for them.
    pub async fn weekly_revenue(&self) -> Result<Vec<Value>> {
        self.fetch(Endpoint::WeeklyRevenue, &()).await
    }

    /// Delivery count per week. Rows are returned raw; there is no record type for them.
    pub async fn weekly_deliveries(&self) -> Result<Vec<Value>> {
        self.fetch(Endpoint::WeeklyDeliveries, &()).await
    }
}
