// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel serial day number for a `YYYY-MM-DD` string, if it is one.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;

    Some((d - excel_epoch).num_days() as f64)
}
