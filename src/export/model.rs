// src/export/model.rs

use serde_json::{Map, Value};

/// Compiled report: a fixed header row and body rows of plain strings.
/// Every renderer (PDF / CSV / JSON / XLSX) consumes this same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// Rows as JSON objects keyed by header, in row order.
    pub(crate) fn to_json_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (h, cell) in self.headers.iter().zip(row) {
                    obj.insert(h.clone(), Value::String(cell.clone()));
                }
                Value::Object(obj)
            })
            .collect()
    }
}
