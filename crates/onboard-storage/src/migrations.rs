//! Schema migrations keyed off SQLite's `user_version` pragma.

use rusqlite::Connection;

use onboard_core::errors::{OnboardError, OnboardResult, StorageError};

use crate::to_storage_err;

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

const V1_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        department TEXT,
        start_date TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER,
        title TEXT NOT NULL,
        description TEXT,
        status TEXT DEFAULT 'Not Started',
        due_date TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (employee_id) REFERENCES employees (id)
    );

    CREATE INDEX IF NOT EXISTS idx_tasks_employee ON tasks (employee_id);
";

/// Bring the database up to [`LATEST_VERSION`]. Idempotent.
pub fn run_migrations(conn: &Connection) -> OnboardResult<()> {
    let current: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| to_storage_err(format!("read user_version: {e}")))?;

    if current < 1 {
        apply(conn, 1, V1_SCHEMA)?;
    }

    Ok(())
}

fn apply(conn: &Connection, version: u32, schema: &str) -> OnboardResult<()> {
    conn.execute_batch(schema)
        .map_err(|e| migration_err(version, e))?;
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| migration_err(version, e))?;
    tracing::info!(version, "applied schema migration");
    Ok(())
}

fn migration_err(version: u32, e: rusqlite::Error) -> OnboardError {
    OnboardError::Storage(StorageError::MigrationFailed {
        version,
        reason: e.to_string(),
    })
}
