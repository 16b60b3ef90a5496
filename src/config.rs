use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DASHBOARD_PREFIX: &str = "/dashboard";

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLSX_SHEET_NAME: &str = "Sheet1";

/// Directory exports land in by default: the platform download directory
/// (e.g. `~/Downloads`), or the working directory if there is none.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// HTTP method an endpoint is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Every analytics endpoint exposed under [`DASHBOARD_PREFIX`].
///
/// Filtered charts are POSTed a temporal filter body; the three weekly
/// aggregates are plain GETs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CashFlowChart,
    DeliveryLocationsChart,
    PaymentsByTypeChart,
    PerformanceByRegionChart,
    SalesByChannelDescriptionChart,
    TopItemsChart,
    CustomerRetention,
    WeeklyAverageTicket,
    WeeklyRevenue,
    WeeklyDeliveries,
}

impl Endpoint {
    pub const ALL: [Endpoint; 10] = [
        Endpoint::CashFlowChart,
        Endpoint::DeliveryLocationsChart,
        Endpoint::PaymentsByTypeChart,
        Endpoint::PerformanceByRegionChart,
        Endpoint::SalesByChannelDescriptionChart,
        Endpoint::TopItemsChart,
        Endpoint::CustomerRetention,
        Endpoint::WeeklyAverageTicket,
        Endpoint::WeeklyRevenue,
        Endpoint::WeeklyDeliveries,
    ];

    /// Last path segment, as the server routes it.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::CashFlowChart => "cashFlowChart",
            Endpoint::DeliveryLocationsChart => "deliveryLocationsChart",
            Endpoint::PaymentsByTypeChart => "paymentsByTypeChart",
            Endpoint::PerformanceByRegionChart => "performanceByRegionChart",
            Endpoint::SalesByChannelDescriptionChart => "salesByChannelDescriptionChart",
            Endpoint::TopItemsChart => "topItemsChart",
            Endpoint::CustomerRetention => "customerRetention",
            Endpoint::WeeklyAverageTicket => "weeklyAverageTicket",
            Endpoint::WeeklyRevenue => "weeklyRevenue",
            Endpoint::WeeklyDeliveries => "weeklyDeliveries",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::WeeklyAverageTicket | Endpoint::WeeklyRevenue | Endpoint::WeeklyDeliveries => {
                Method::Get
            }
            _ => Method::Post,
        }
    }

    /// Path relative to the base URL, e.g. `/dashboard/topItemsChart`.
    pub fn path(self) -> String {
        format!("{}/{}", DASHBOARD_PREFIX, self.name())
    }

    /// Absolute URL for this endpoint under `base_url`.
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
