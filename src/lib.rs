//! Restaurant dashboard SDK for Rust.
//!
//! Provides a client for the analytics endpoints of the restaurant
//! management API, typed records for each chart, and CSV/XLSX export of
//! tabular results.
//!
//! The client returns each endpoint's raw JSON rows; decoding into records is
//! a separate, explicit step through [`models::decode_rows`].
//!
//! # Quick start
//!
//! ```no_run
//! use restaurant_dashboard_sdk::models::{decode_rows, TopItem};
//! use restaurant_dashboard_sdk::export::{export_to_csv, DirectorySink};
//! use restaurant_dashboard_sdk::{DashboardClient, TemporalFilter};
//!
//! let client = DashboardClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()
//!     .unwrap();
//!
//! let rows = client.top_items_chart(&TemporalFilter::new()).unwrap();
//! let items: Vec<TopItem> = decode_rows(&rows).unwrap();
//!
//! let mut sink = DirectorySink::downloads().unwrap();
//! export_to_csv(&rows, "top-items", &mut sink).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;

#[cfg(feature = "async")]
pub use async_client::AsyncDashboardClient;
pub use config::{Endpoint, Method};
pub use error::{DashboardError, Result};
pub use filter::{Granularity, TemporalFilter};

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// DashboardClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DashboardClient`].
///
/// Use [`DashboardClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DashboardClientBuilder::build).
#[derive(Debug, Clone)]
pub struct DashboardClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: None,
            headers: Vec::new(),
        }
    }
}

impl DashboardClientBuilder {
    /// Set the API base address (scheme, host and port; no `/dashboard`).
    ///
    /// Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a per-request timeout.
    ///
    /// Requests have no timeout unless this is called.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header sent with every request (e.g. an API key).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build the blocking client.
    ///
    /// Fails if the base URL or a header does not parse.
    pub fn build(self) -> Result<DashboardClient> {
        let base_url = self.checked_base_url()?;
        let http = Client::builder()
            .timeout(self.timeout)
            .default_headers(self.header_map()?)
            .build()?;
        Ok(DashboardClient { http, base_url })
    }

    /// Build the async client.
    #[cfg(feature = "async")]
    pub fn build_async(self) -> Result<AsyncDashboardClient> {
        let base_url = self.checked_base_url()?;
        let mut builder = reqwest::Client::builder().default_headers(self.header_map()?);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(AsyncDashboardClient::new(builder.build()?, base_url))
    }

    fn checked_base_url(&self) -> Result<String> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            DashboardError::InvalidArgument(format!("invalid base URL '{}': {e}", self.base_url))
        })?;
        if url.cannot_be_a_base() {
            return Err(DashboardError::InvalidArgument(format!(
                "invalid base URL '{}': not a base address",
                self.base_url
            )));
        }
        Ok(self.base_url.trim_end_matches('/').to_string())
    }

    fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| DashboardError::InvalidArgument(format!("invalid header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| DashboardError::InvalidArgument(format!("invalid header value for '{name}': {e}")))?;
            map.append(name, value);
        }
        Ok(map)
    }
}

// ---------------------------------------------------------------------------
// DashboardClient
// ---------------------------------------------------------------------------

/// Blocking client for the dashboard analytics endpoints.
///
/// Every call issues exactly one request and returns the decoded JSON array
/// as-is. Transport failures and non-success statuses are returned as
/// [`DashboardError::Http`]; nothing is retried.
///
/// Created via [`DashboardClient::builder()`]. Cloning is cheap and clones
/// share the connection pool.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: Client,
    base_url: String,
}

impl DashboardClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    /// The base address requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `endpoint` and return its rows.
    ///
    /// `body` is sent as JSON for POST endpoints and ignored for GET ones.
    pub fn fetch<B: Serialize + ?Sized>(&self, endpoint: Endpoint, body: &B) -> Result<Vec<Value>> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(method = %endpoint.method(), %url, "dashboard request");

        let request = match endpoint.method() {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url).json(body),
        };
        let resp = request.send()?.error_for_status()?;
        let status = resp.status();
        let bytes = resp.bytes()?;
        let rows: Vec<Value> = serde_json::from_slice(&bytes)?;

        tracing::debug!(%url, %status, rows = rows.len(), "dashboard response");
        Ok(rows)
    }

    // -- Filtered charts (POST) ---------------------------------------------

    /// Daily cash flow. Rows decode as [`models::CashFlowByDay`].
    pub fn cash_flow_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::CashFlowChart, filter)
    }

    /// Delivery drop-off points. Rows decode as [`models::DeliveryLocation`].
    pub fn delivery_locations_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::DeliveryLocationsChart, filter)
    }

    /// Totals per payment method. Rows decode as [`models::PaymentsByType`].
    pub fn payments_by_type_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::PaymentsByTypeChart, filter)
    }

    /// Delivery performance per neighborhood. Rows decode as
    /// [`models::RegionPerformance`].
    pub fn performance_by_region_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::PerformanceByRegionChart, filter)
    }

    /// Revenue per sales channel. Rows decode as
    /// [`models::SalesByChannelDescription`].
    pub fn sales_by_channel_description_chart<B: Serialize + ?Sized>(
        &self,
        filter: &B,
    ) -> Result<Vec<Value>> {
        self.fetch(Endpoint::SalesByChannelDescriptionChart, filter)
    }

    /// Best selling items. Rows decode as [`models::TopItem`].
    pub fn top_items_chart<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::TopItemsChart, filter)
    }

    /// Customers per retention status. Rows decode as
    /// [`models::CustomerRetention`].
    pub fn customer_retention<B: Serialize + ?Sized>(&self, filter: &B) -> Result<Vec<Value>> {
        self.fetch(Endpoint::CustomerRetention, filter)
    }

    // -- Weekly aggregates (GET) --------------------------------------------

    /// Average ticket per week. Rows are returned raw; there is no record type for them.
    pub fn weekly_average_ticket(&self) -> Result<Vec<Value>> {
        self.fetch(Endpoint::WeeklyAverageTicket, &())
    }

    /// Revenue per week. Rows are returned raw; there is no record type for them.
    pub fn weekly_revenue(&self) -> Result<Vec<Value>> {
        self.fetch(Endpoint::WeeklyRevenue, &())
    }

    /// Delivery count per week. Rows are returned raw; there is no record type for them.
    pub fn weekly_deliveries(&self) -> Result<Vec<Value>> {
        self.fetch(Endpoint::WeeklyDeliveries, &())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DashboardClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DashboardClient(base_url={})", self.base_url)
    }
}
