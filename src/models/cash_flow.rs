use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::coerce::{lenient_date, lenient_f64};

// ---------------------------------------------------------------------------
// CashFlowByDay — One day of the cash flow chart
// ---------------------------------------------------------------------------

/// Daily cash flow totals, as returned by `/dashboard/cashFlowChart`.
///
/// `day` is `None` when the server sent something that is not a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowByDay {
    #[serde(default, deserialize_with = "lenient_date")]
    pub day: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_sales: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_value_paid: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_ticket: f64,
}

// ---------------------------------------------------------------------------
// CashFlowBreakdownByDay — Per-day cash flow with fee and discount columns
// ---------------------------------------------------------------------------

/// Wider per-day cash flow row carrying discounts, increases and fees.
///
/// Its sales key is `total_sales_amount`, not `total_sales`: decoding a
/// [`CashFlowByDay`] row with this type leaves the sales total at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowBreakdownByDay {
    #[serde(default, deserialize_with = "lenient_date")]
    pub day: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_sales_amount: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_value_paid: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_discount: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_increase: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_delivery_fee: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_service_tax_fee: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_ticket: f64,
}
