//! Import/export boundary: the ledger travels as a pretty-printed JSON array
//! of transaction objects, the same shape the snapshot uses.

use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::{LedgerError, Result},
    ledger::{Category, EntryKind, Ledger, Transaction},
};

/// Export file name derived from the given day, e.g.
/// `expense-tracker-2024-02-03.json`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("expense-tracker-{}.json", today.format("%Y-%m-%d"))
}

/// Writes the full ledger to the given path as pretty-printed JSON.
pub fn export_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), entries = ledger.len(), "ledger exported");
    Ok(())
}

/// Reads and validates an import file. See [`parse_import`].
pub fn import_from_path(path: &Path) -> Result<Vec<Transaction>> {
    let payload = fs::read_to_string(path)?;
    parse_import(&payload)
}

/// Parses an import payload. The whole import is one unit: a payload that is
/// not a non-empty JSON array, or that contains a single invalid record,
/// is rejected outright so a partial batch can never land. Ids carried in
/// the file are ignored; the store reassigns them on merge.
pub fn parse_import(payload: &str) -> Result<Vec<Transaction>> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|err| LedgerError::Import(format!("not valid JSON ({err})")))?;
    let items = value
        .as_array()
        .ok_or_else(|| LedgerError::Import("top level must be an array".into()))?;
    if items.is_empty() {
        return Err(LedgerError::Import("no transactions found in file".into()));
    }

    let mut batch = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let txn = validate_record(item)
            .map_err(|reason| LedgerError::Import(format!("record {}: {reason}", index + 1)))?;
        batch.push(txn);
    }
    Ok(batch)
}

/// Loosely-typed wire shape; field checks happen in [`validate_record`] so
/// rejections can name the offending field.
#[derive(Deserialize)]
struct RawRecord {
    title: Option<String>,
    amount: Option<f64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    category: Option<String>,
    date: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

fn validate_record(item: &Value) -> std::result::Result<Transaction, String> {
    let raw: RawRecord = serde_json::from_value(item.clone())
        .map_err(|err| format!("malformed object ({err})"))?;

    let title = raw
        .title
        .filter(|text| !text.trim().is_empty())
        .ok_or("missing or empty `title`")?;
    let amount = raw.amount.ok_or("missing `amount`")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(format!("`amount` must be a positive number, got {amount}"));
    }
    let kind = raw
        .kind
        .as_deref()
        .and_then(EntryKind::from_keyword)
        .ok_or("`type` must be \"income\" or \"expense\"")?;
    // Out-of-set categories are tolerated and carried verbatim.
    let category = raw
        .category
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(Category::from_keyword)
        .ok_or("missing or empty `category`")?;
    let date = raw
        .date
        .as_deref()
        .and_then(|text| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok())
        .ok_or("`date` must be a YYYY-MM-DD calendar date")?;
    let description = raw.description.filter(|text| !text.trim().is_empty());

    Ok(Transaction::new(0, title, amount, kind, category, date, description))
}
