use rust_xlsxwriter::{Workbook, Worksheet};
use serde_json::{Map, Value};

use crate::config::XLSX_SHEET_NAME;
use crate::error::{DashboardError, Result};

/// Serialize a table of flat records to a single-sheet XLSX workbook.
///
/// Null and non-object rows are written as empty rows. The header row is the
/// union of all row keys in first-seen order. Returns `None` for an empty
/// table.
pub fn xlsx_bytes(rows: &[Value]) -> Result<Option<Vec<u8>>> {
    if rows.is_empty() {
        return Ok(None);
    }

    let empty = Map::new();
    let objects: Vec<&Map<String, Value>> = rows
        .iter()
        .map(|row| row.as_object().unwrap_or(&empty))
        .collect();

    let mut headers: Vec<&str> = Vec::new();
    for obj in &objects {
        for key in obj.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(XLSX_SHEET_NAME)?;

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col_index(col)?, *header)?;
    }

    for (i, obj) in objects.iter().enumerate() {
        let row = row_index(i + 1)?;
        for (col, header) in headers.iter().enumerate() {
            if let Some(value) = obj.get(*header) {
                write_cell(worksheet, row, col_index(col)?, value)?;
            }
        }
    }

    Ok(Some(workbook.save_to_buffer()?))
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &Value) -> Result<()> {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) => {
                sheet.write_number(row, col, f)?;
            }
            None => {
                sheet.write_string(row, col, n.to_string())?;
            }
        },
        Value::String(s) => {
            sheet.write_string(row, col, s.as_str())?;
        }
        Value::Array(_) | Value::Object(_) => {
            sheet.write_string(row, col, value.to_string())?;
        }
    }
    Ok(())
}

fn row_index(i: usize) -> Result<u32> {
    u32::try_from(i).map_err(|_| DashboardError::InvalidArgument(format!("row {i} out of range")))
}

fn col_index(i: usize) -> Result<u16> {
    u16::try_from(i).map_err(|_| DashboardError::InvalidArgument(format!("column {i} out of range")))
}
