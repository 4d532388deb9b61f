//! Schema migrations. Each migration is applied once and recorded in the
//! `log` table as `migration_applied`.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260114_0001_create_history",
        message: "Created history table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS history (
            id             TEXT PRIMARY KEY,
            result_seconds INTEGER NOT NULL,
            label          TEXT NOT NULL,
            color          TEXT NOT NULL DEFAULT 'blue',
            created_at     TEXT NOT NULL,
            last_modified  TEXT NOT NULL,
            steps          TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20260302_0002_history_created_date",
        message: "Added created_date column and index to history",
        sql: r#"
        ALTER TABLE history ADD COLUMN created_date TEXT NOT NULL DEFAULT '';
        UPDATE history SET created_date = substr(created_at, 1, 10);
        CREATE INDEX IF NOT EXISTS idx_history_created_date ON history(created_date);
        "#,
    },
];

/// Ensure that the `log` table exists.
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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.message],
    )?;
    tx.commit()
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Returns the versions applied in this run.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        success(format!("Migration applied: {} → {}", m.version, m.message));
        applied.push(m.version);
    }

    Ok(applied)
}
