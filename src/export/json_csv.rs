// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ReportTable;
use serde_json::json;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: `{ "title": ..., "rows": [ {header: value}, ... ] }`.
pub(crate) fn export_json(table: &ReportTable, path: &Path) -> AppResult<()> {
    let doc = json!({
        "title": table.title,
        "rows": table.to_json_records(),
    });

    let json_data = serde_json::to_string_pretty(&doc)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// Export CSV: header row, then one record per report row.
pub(crate) fn export_csv(table: &ReportTable, path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(&table.headers)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for row in &table.rows {
        wtr.write_record(row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    Ok(())
}
