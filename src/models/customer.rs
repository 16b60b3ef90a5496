use serde::{Deserialize, Serialize};

use super::coerce::{lenient_label, strict_f64};

// ---------------------------------------------------------------------------
// CustomerRetention — Customer count per retention status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRetention {
    /// Retention bucket label, e.g. `"novo"` or `"recorrente"`.
    #[serde(default, deserialize_with = "lenient_label")]
    pub status: Option<String>,
    #[serde(deserialize_with = "strict_f64")]
    pub quantidade: f64,
}
