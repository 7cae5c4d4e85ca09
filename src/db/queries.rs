use crate::errors::AppError;
use crate::models::attendance::AttendanceEntry;
use crate::models::status::Status;
use crate::models::student::StudentRecord;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Students
// ---------------------------

pub fn map_student(row: &Row) -> Result<StudentRecord> {
    Ok(StudentRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        course: row.get("course")?,
        pass_id: row.get("pass_id")?,
    })
}

pub fn get_student(conn: &Connection, id: &str) -> Result<Option<StudentRecord>> {
    conn.query_row(
        "SELECT id, name, course, pass_id FROM students WHERE id = ?1",
        [id],
        map_student,
    )
    .optional()
}

/// First registered student carrying the given pass id.
pub fn find_student_by_pass_id(conn: &Connection, pass_id: &str) -> Result<Option<StudentRecord>> {
    conn.query_row(
        "SELECT id, name, course, pass_id FROM students
         WHERE pass_id = ?1
         ORDER BY rowid ASC
         LIMIT 1",
        [pass_id],
        map_student,
    )
    .optional()
}

/// Insert or overwrite a student. Returns `true` when the id was new.
pub fn upsert_student(conn: &Connection, student: &StudentRecord) -> Result<bool> {
    let existed = get_student(conn, &student.id)?.is_some();

    conn.execute(
        "INSERT INTO students (id, name, course, pass_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             course = excluded.course,
             pass_id = excluded.pass_id",
        params![
            student.id,
            student.name,
            student.course,
            student.pass_id,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(!existed)
}

/// All students in registration order.
pub fn load_students(conn: &Connection) -> Result<Vec<StudentRecord>> {
    let mut stmt =
        conn.prepare("SELECT id, name, course, pass_id FROM students ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_student)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Attendance ledger
// ---------------------------

pub fn map_entry(row: &Row) -> Result<AttendanceEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(AttendanceEntry {
        student_id: row.get("student_id")?,
        name: row.get("name")?,
        course: row.get("course")?,
        date,
        status,
    })
}

pub fn get_entry(conn: &Connection, date: &NaiveDate, student_id: &str) -> Result<Option<AttendanceEntry>> {
    conn.query_row(
        "SELECT date, student_id, name, course, status FROM attendance
         WHERE date = ?1 AND student_id = ?2",
        params![date.format("%Y-%m-%d").to_string(), student_id],
        map_entry,
    )
    .optional()
}

/// Write or overwrite the entry for (date, student_id).
pub fn upsert_entry(conn: &Connection, entry: &AttendanceEntry) -> Result<()> {
    conn.execute(
        "INSERT INTO attendance (date, student_id, name, course, status, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(date, student_id) DO UPDATE SET
             name = excluded.name,
             course = excluded.course,
             status = excluded.status,
             updated_at = excluded.updated_at",
        params![
            entry.date_str(),
            entry.student_id,
            entry.name,
            entry.course,
            entry.status.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Entries for one date, in the order students were first marked.
pub fn load_entries_by_date(conn: &Connection, date: &NaiveDate) -> Result<Vec<AttendanceEntry>> {
    let mut stmt = conn.prepare(
        "SELECT date, student_id, name, course, status FROM attendance
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert an `absent` entry for every student with no entry on `date`.
/// Existing entries are left as they are. Returns the number inserted.
pub fn insert_missing_absent(conn: &Connection, date: &NaiveDate) -> Result<usize> {
    conn.execute(
        "INSERT INTO attendance (date, student_id, name, course, status, updated_at)
         SELECT ?1, s.id, s.name, s.course, 'absent', ?2
         FROM students s
         WHERE NOT EXISTS (
             SELECT 1 FROM attendance a
             WHERE a.date = ?1 AND a.student_id = s.id
         )
         ORDER BY s.rowid ASC",
        params![date.format("%Y-%m-%d").to_string(), Local::now().to_rfc3339()],
    )
}

// ---------------------------
// Internal log
// ---------------------------

pub fn load_log(conn: &Connection) -> Result<Vec<(i32, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
