use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;
use serde_json::Value as JsonValue;

use super::model::Record;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load job records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row names the fields; every cell kept as raw text
/// * `.json` – `[{ "job_type": "...", "min_salary": "...", ... }, ...]`
///
/// Salary fields are not validated here; malformed values are a query-time
/// concern.
pub fn read(path: &Path) -> Result<Vec<Record>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => read_csv(path)?,
        "json" => read_json(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    debug!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn read_csv(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    csv_from_reader(file)
}

/// CSV layout: a header row naming the fields, one record per data row.
pub fn csv_from_reader<R: io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<Record>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn read_json(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    json_from_str(&text)
}

/// Expected JSON schema (records-oriented): a top-level array of objects.
/// Scalar values are coerced to their text form; `null` becomes the empty
/// string, the same "unspecified" marker the CSV feed uses.
pub fn json_from_str(text: &str) -> Result<Vec<Record>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        let record: Record = obj
            .iter()
            .map(|(field, value)| (field.clone(), json_to_text(value)))
            .collect();
        records.push(record);
    }
    Ok(records)
}

fn json_to_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
