use crate::config::Config;
use crate::db::store::AttendanceLedger;
use crate::errors::{AppError, AppResult};
use crate::export::{ReportFormat, ReportTable, write_report};
use crate::models::attendance::AttendanceEntry;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub show_course: bool,
    pub show_date: bool,
}

impl From<&Config> for ReportOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            title: cfg.report_title.clone(),
            show_course: cfg.report_show_course,
            show_date: cfg.report_show_date,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: crate::config::default_report_title(),
            show_course: true,
            show_date: true,
        }
    }
}

/// Turns the ledger entries of one date into a fixed-column table.
pub struct ReportCompiler {
    opts: ReportOptions,
}

impl ReportCompiler {
    pub fn new(opts: ReportOptions) -> Self {
        Self { opts }
    }

    pub fn headers(&self) -> Vec<String> {
        let mut h = vec!["ID".to_string(), "Name".to_string()];
        if self.opts.show_course {
            h.push("Course".into());
        }
        if self.opts.show_date {
            h.push("Date".into());
        }
        h.push("Status".into());
        h
    }

    fn row(&self, entry: &AttendanceEntry) -> Vec<String> {
        let mut r = vec![entry.student_id.clone(), entry.name.clone()];
        if self.opts.show_course {
            r.push(entry.course_str().to_string());
        }
        if self.opts.show_date {
            r.push(entry.date_str());
        }
        r.push(entry.status.label().to_string());
        r
    }

    /// Rows keep the order of `entries` (ledger order, not sorted).
    pub fn compile(&self, date: NaiveDate, entries: &[AttendanceEntry]) -> AppResult<ReportTable> {
        if entries.is_empty() {
            return Err(AppError::EmptyResult(date.format("%Y-%m-%d").to_string()));
        }

        Ok(ReportTable {
            title: format!("{} {}", self.opts.title, date.format("%Y-%m-%d")),
            headers: self.headers(),
            rows: entries.iter().map(|e| self.row(e)).collect(),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Nothing marked on that date: no artifact was produced.
    NoData,
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn generate<L>(
        ledger: &L,
        compiler: &ReportCompiler,
        date: NaiveDate,
        format: ReportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<ReportOutcome>
    where
        L: AttendanceLedger + ?Sized,
    {
        let entries = ledger.entries_for_date(&date)?;

        if entries.is_empty() {
            warning(format!(
                "No attendance recorded for {}: nothing to report.",
                date.format("%Y-%m-%d")
            ));
            return Ok(ReportOutcome::NoData);
        }

        let table = compiler.compile(date, &entries)?;
        write_report(&table, format, path, force)?;

        Ok(ReportOutcome::Written {
            path: path.to_path_buf(),
            rows: table.rows.len(),
        })
    }
}
