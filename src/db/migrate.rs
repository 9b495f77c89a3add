use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists: it also records applied migrations.
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
    )
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_draft_tables",
        description: "Created employee, days and meta tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employee (
            id          INTEGER PRIMARY KEY CHECK (id = 1),
            full_name   TEXT,
            email       TEXT,
            employee_id TEXT
        );

        CREATE TABLE IF NOT EXISTS days (
            date          TEXT PRIMARY KEY,
            day_of_week   TEXT NOT NULL CHECK(day_of_week IN ('SUN','MON','TUE','WED','THU','FRI','SAT')),
            start_time    TEXT,
            end_time      TEXT,
            total_hours   REAL CHECK(total_hours IS NULL OR total_hours >= 0),
            break_minutes INTEGER CHECK(break_minutes IS NULL OR break_minutes >= 0),
            kilometers    REAL CHECK(kilometers IS NULL OR kilometers >= 0),
            notes         TEXT,
            CHECK ((start_time IS NULL) = (end_time IS NULL))
        );

        CREATE TABLE IF NOT EXISTS meta (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250412_0002_log_operation_index",
        description: "Added index on log(operation)",
        sql: "CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);",
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)?;
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
