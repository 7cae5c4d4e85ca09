// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ReportTable;
use crate::export::pdf::PdfManager;
use crate::token::TokenMatrix;
use std::path::Path;

/// Report table → PDF.
pub(crate) fn export_pdf(table: &ReportTable, path: &Path) -> AppResult<()> {
    let mut pdf = PdfManager::new();
    pdf.write_table(&table.title, &table.headers, &table.rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))
}

/// Student pass → PDF.
pub(crate) fn export_pass(
    title: &str,
    fields: &[(&str, &str)],
    token: &TokenMatrix,
    path: &Path,
) -> AppResult<()> {
    let mut pdf = PdfManager::new();
    pdf.write_pass(title, fields, token);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF pass error: {e}")))
}
