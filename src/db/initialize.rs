use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Writers from another process (a second terminal marking the same class)
/// are waited for instead of failing with SQLITE_BUSY.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Prepare a freshly opened connection: connection settings first, then
/// every pending schema migration. Returns the number of migrations applied.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    run_pending_migrations(conn)
}
