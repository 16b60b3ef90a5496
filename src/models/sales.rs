use serde::{Deserialize, Serialize};

use super::coerce::{lenient_f64, lenient_label, strict_f64};

// ---------------------------------------------------------------------------
// SalesByChannelDescription — Revenue per sales channel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesByChannelDescription {
    #[serde(default, deserialize_with = "lenient_label")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_sales: f64,
}

// ---------------------------------------------------------------------------
// PaymentsByType — Amount received per payment method
// ---------------------------------------------------------------------------

/// Total received per payment method (`tipo_pagamento`).
///
/// `valor_total` is strict: a row without a usable amount fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsByType {
    #[serde(default, deserialize_with = "lenient_label")]
    pub tipo_pagamento: Option<String>,
    #[serde(deserialize_with = "strict_f64")]
    pub valor_total: f64,
}

// ---------------------------------------------------------------------------
// TopItem — Best selling menu items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    #[serde(default, deserialize_with = "lenient_label")]
    pub item: Option<String>,
    /// Number of times the item was added to an order.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub times_added: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_generated: f64,
}
