//! Tabular export to CSV and XLSX.
//!
//! A table is a slice of flat JSON records (`serde_json::Value` objects),
//! either straight from the dashboard client or produced from decoded
//! records with [`to_rows`]. Serialization and delivery are separate steps:
//! [`csv_bytes`] / [`xlsx_bytes`] build the file contents, and
//! [`export_to_csv`] / [`export_to_excel`] hand them to an [`ExportSink`].
//!
//! # Example
//!
//! ```no_run
//! use restaurant_dashboard_sdk::export::{export_to_csv, DirectorySink};
//! use serde_json::json;
//!
//! let rows = vec![json!({"a": 1, "b": 2}), json!({"a": 3, "b": null})];
//! let mut sink = DirectorySink::new("exports").unwrap();
//! export_to_csv(&rows, "report", &mut sink).unwrap();
//! ```

pub mod csv;
pub mod sink;
pub mod xlsx;

pub use self::csv::{cell_text, csv_bytes};
pub use self::sink::{DirectorySink, ExportFile, ExportSink, MemorySink};
pub use self::xlsx::xlsx_bytes;

use serde::Serialize;
use serde_json::Value;

use crate::config::{CSV_CONTENT_TYPE, XLSX_CONTENT_TYPE};
use crate::error::{DashboardError, Result};

/// Turn decoded records back into export rows, keeping field order.
pub fn to_rows<T: Serialize>(items: &[T]) -> Result<Vec<Value>> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(DashboardError::from))
        .collect()
}

/// Export `rows` as `<filename>.csv` to `sink`.
///
/// Returns `Ok(false)` without touching the sink when `rows` is empty.
pub fn export_to_csv<S: ExportSink + ?Sized>(rows: &[Value], filename: &str, sink: &mut S) -> Result<bool> {
    let Some(bytes) = csv_bytes(rows) else {
        tracing::debug!(filename, "csv export skipped: no rows");
        return Ok(false);
    };
    check_filename(filename)?;
    sink.deliver(ExportFile {
        file_name: format!("{filename}.csv"),
        content_type: CSV_CONTENT_TYPE,
        bytes,
    })?;
    Ok(true)
}

/// Export `rows` as `<filename>.xlsx` (single sheet) to `sink`.
///
/// Null entries become empty rows. Returns `Ok(false)` without touching the
/// sink when `rows` is empty.
pub fn export_to_excel<S: ExportSink + ?Sized>(rows: &[Value], filename: &str, sink: &mut S) -> Result<bool> {
    if rows.is_empty() {
        tracing::debug!(filename, "xlsx export skipped: no rows");
        return Ok(false);
    }
    check_filename(filename)?;
    let Some(bytes) = xlsx_bytes(rows)? else {
        return Ok(false);
    };
    sink.deliver(ExportFile {
        file_name: format!("{filename}.xlsx"),
        content_type: XLSX_CONTENT_TYPE,
        bytes,
    })?;
    Ok(true)
}

fn check_filename(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        return Err(DashboardError::InvalidArgument("export filename is empty".into()));
    }
    Ok(())
}
