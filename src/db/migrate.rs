use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Every other migration records itself
/// there, so this one always runs first and is not versioned.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if `table` has a column called `column`.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `students` table (first schema, without `pass_id`).
fn create_students_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            course      TEXT,
            created_at  TEXT NOT NULL
        );
        "#,
    )
}

/// Create the `attendance` ledger keyed by (date, student_id).
///
/// `id` only preserves first-mark order: upserts keep the row id, so reads
/// ordered by `id` return entries in the order students were first marked.
fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            student_id  TEXT NOT NULL,
            name        TEXT NOT NULL,
            course      TEXT,
            status      TEXT NOT NULL CHECK(status IN ('present','absent')),
            updated_at  TEXT NOT NULL,
            UNIQUE(date, student_id)
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
        "#,
    )
}

/// Add the secondary `pass_id` lookup key to `students`.
fn add_pass_id_to_students(conn: &Connection) -> Result<()> {
    if !table_has_column(conn, "students", "pass_id")? {
        conn.execute("ALTER TABLE students ADD COLUMN pass_id TEXT;", [])?;
    }
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_students_pass_id ON students(pass_id);")
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

/// Ordered list of schema migrations. Append only.
const MIGRATIONS: &[Migration] = &[
    (
        "20250901_0001_create_students",
        "Created students table",
        create_students_table,
    ),
    (
        "20250901_0002_create_attendance",
        "Created attendance ledger",
        create_attendance_table,
    ),
    (
        "20250915_0003_add_students_pass_id",
        "Added pass_id lookup column to students",
        add_pass_id_to_students,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() at startup and by `db --migrate`.
/// Returns the number of migrations applied in this run.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn).map_err(|e| AppError::Migration(format!("{version}: {e}")))?;
        mark_applied(conn, version, message)?;

        success(format!("Migration applied: {} → {}", version, message));
        applied += 1;
    }

    Ok(applied)
}
