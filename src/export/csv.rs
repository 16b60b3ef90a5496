use serde_json::Value;

/// Render a JSON cell the way it appears in a delimited text export.
///
/// Null is empty, strings are written raw, numbers use their shortest
/// decimal form (`1.0` prints as `1`), nested values are compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Serialize a table of flat records to comma-delimited text.
///
/// Columns are the keys of the first row, in insertion order. Cells are not
/// quoted or escaped. Returns `None` for an empty table.
pub fn csv_bytes(rows: &[Value]) -> Option<Vec<u8>> {
    let first = rows.first()?;
    let headers: Vec<&str> = first
        .as_object()
        .map(|obj| obj.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let mut out = headers.join(",");
    out.push('\n');

    for row in rows {
        let line: Vec<String> = headers
            .iter()
            .map(|h| row.get(*h).map(cell_text).unwrap_or_default())
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    Some(out.into_bytes())
}
