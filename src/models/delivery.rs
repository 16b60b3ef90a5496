use serde::{Deserialize, Serialize};

use super::coerce::{lenient_f64, lenient_label};

// ---------------------------------------------------------------------------
// DeliveryLocation — A delivery drop-off point for the map view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLocation {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// RegionPerformance — Delivery volume and timing per neighborhood
// ---------------------------------------------------------------------------

/// Delivery performance for one neighborhood.
///
/// Durations are in minutes; `p90_delivery_minutes` is the 90th percentile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPerformance {
    #[serde(default, deserialize_with = "lenient_label")]
    pub neighborhood: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub deliveries: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_delivery_minutes: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub p90_delivery_minutes: f64,
}
