pub mod cash_flow;
pub mod coerce;
pub mod customer;
pub mod delivery;
pub mod sales;

pub use cash_flow::*;
pub use customer::*;
pub use delivery::*;
pub use sales::*;

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::error::Result;

/// Decode one raw row returned by the dashboard client into a record type.
///
/// Fails if the row is not a JSON object, or if a strict field is missing or
/// malformed. Lenient fields never fail.
pub fn decode<T: DeserializeOwned>(row: &Value) -> Result<T> {
    if !row.is_object() {
        return Err(serde_json::Error::custom(format!("expected an object row, found {row}")).into());
    }
    Ok(T::deserialize(row)?)
}

/// Decode every row of a raw response, stopping at the first failure.
pub fn decode_rows<T: DeserializeOwned>(rows: &[Value]) -> Result<Vec<T>> {
    rows.iter().map(decode).collect()
}
