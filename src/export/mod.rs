// src/export/mod.rs

mod excel_date;
pub(crate) mod fs_utils;
mod json_csv;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use model::ReportTable;

use crate::errors::AppResult;
use crate::token::TokenMatrix;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every artifact.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Pdf,
    Csv,
    Json,
    Xlsx,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Xlsx => "xlsx",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF report",
            ReportFormat::Csv => "CSV report",
            ReportFormat::Json => "JSON report",
            ReportFormat::Xlsx => "XLSX report",
        }
    }
}

/// Render a compiled report to `path` in the requested format.
///
/// An existing file is only replaced when `force` is set or the user
/// confirms; the artifact is written through a scratch file.
pub fn write_report(
    table: &ReportTable,
    format: ReportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    info(format!("Exporting to {}: {}", format.as_str().to_uppercase(), path.display()));

    fs_utils::write_atomically(path, |scratch| match format {
        ReportFormat::Pdf => pdf_export::export_pdf(table, scratch),
        ReportFormat::Csv => json_csv::export_csv(table, scratch),
        ReportFormat::Json => json_csv::export_json(table, scratch),
        ReportFormat::Xlsx => xlsx::export_xlsx(table, scratch),
    })?;

    notify_export_success(format.label(), path);
    Ok(())
}

/// Render a printable student pass (fields + QR token) to `path`.
pub fn write_pass(
    title: &str,
    fields: &[(&str, &str)],
    token: &TokenMatrix,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    fs_utils::write_atomically(path, |scratch| {
        pdf_export::export_pass(title, fields, token, scratch)
    })?;

    notify_export_success("Pass", path);
    Ok(())
}

/// Save a token as PNG at `path`.
pub fn write_token_png(token: &TokenMatrix, scale: u32, path: &Path, force: bool) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    fs_utils::write_atomically(path, |scratch| token.save_png(scratch, scale))?;

    notify_export_success("Token", path);
    Ok(())
}
