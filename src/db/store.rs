//! Repository traits over the document store and their SQLite implementation.
//!
//! The workflow in `core` only talks to these traits; the SQLite adapter
//! decides the physical layout (one `students` table, one `attendance` table
//! keyed by (date, student_id)).

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::attendance::AttendanceEntry;
use crate::models::status::Status;
use crate::models::student::StudentRecord;
use chrono::NaiveDate;

pub trait StudentDirectory {
    /// Get by primary key.
    fn get(&self, id: &str) -> AppResult<Option<StudentRecord>>;

    /// Get by the secondary `pass_id` field (first match).
    fn find_by_pass_id(&self, pass_id: &str) -> AppResult<Option<StudentRecord>>;

    /// Create or overwrite; returns `true` when the id was new.
    fn put(&mut self, student: &StudentRecord) -> AppResult<bool>;

    /// Every record, in registration order.
    fn all(&self) -> AppResult<Vec<StudentRecord>>;
}

pub trait AttendanceLedger {
    /// Upsert the entry for (date, student_id). Returns the status it
    /// replaced, if any.
    fn mark(&mut self, entry: &AttendanceEntry) -> AppResult<Option<Status>>;

    /// Entries for `date` in storage order; empty when nothing was marked.
    fn entries_for_date(&self, date: &NaiveDate) -> AppResult<Vec<AttendanceEntry>>;

    /// Mark every registered student without an entry on `date` as absent.
    fn mark_remaining_absent(&mut self, date: &NaiveDate) -> AppResult<usize>;
}

impl StudentDirectory for DbPool {
    fn get(&self, id: &str) -> AppResult<Option<StudentRecord>> {
        Ok(queries::get_student(&self.conn, id)?)
    }

    fn find_by_pass_id(&self, pass_id: &str) -> AppResult<Option<StudentRecord>> {
        Ok(queries::find_student_by_pass_id(&self.conn, pass_id)?)
    }

    fn put(&mut self, student: &StudentRecord) -> AppResult<bool> {
        Ok(queries::upsert_student(&self.conn, student)?)
    }

    fn all(&self) -> AppResult<Vec<StudentRecord>> {
        Ok(queries::load_students(&self.conn)?)
    }
}

impl AttendanceLedger for DbPool {
    fn mark(&mut self, entry: &AttendanceEntry) -> AppResult<Option<Status>> {
        let previous = queries::get_entry(&self.conn, &entry.date, &entry.student_id)?;
        queries::upsert_entry(&self.conn, entry)?;
        Ok(previous.map(|e| e.status))
    }

    fn entries_for_date(&self, date: &NaiveDate) -> AppResult<Vec<AttendanceEntry>> {
        Ok(queries::load_entries_by_date(&self.conn, date)?)
    }

    fn mark_remaining_absent(&mut self, date: &NaiveDate) -> AppResult<usize> {
        Ok(queries::insert_missing_absent(&self.conn, date)?)
    }
}
