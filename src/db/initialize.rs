use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Prepare a freshly opened connection: lock timeout, then every pending
/// schema migration. The draft tables exist only through migrations.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    // two CLI invocations may touch the same draft
    conn.busy_timeout(Duration::from_secs(5))?;

    run_pending_migrations(conn)?;
    Ok(())
}
