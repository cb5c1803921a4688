//! Schema management for the production table.
//!
//! Two policies exist and never mix: `ensure_table` creates the table only
//! when absent and leaves existing rows intact; `reset_table` drops and
//! recreates it, erasing prior contents. Callers pick exactly one per run.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Check if the given table exists.
pub fn table_exists(conn: &Connection, table: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Idempotent creation: a no-op when the table already exists.
pub fn ensure_table(conn: &Connection, table: &str) -> AppResult<()> {
    validate_table_name(table)?;

    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            azon            INTEGER PRIMARY KEY AUTOINCREMENT,
            ev              INTEGER,
            honap           INTEGER,
            nap             INTEGER,
            aranytermeles   BIGINT DEFAULT 0,
            ezusttermeles   BIGINT DEFAULT 0,
            gyemanttermeles BIGINT
        );
        "#
    ))?;

    success(format!("Table '{}' ready.", table));
    Ok(())
}

/// Destructive reset: drop the table, then recreate it empty.
pub fn reset_table(conn: &Connection, table: &str) -> AppResult<()> {
    validate_table_name(table)?;

    conn.execute_batch(&format!("DROP TABLE IF EXISTS {table};"))?;
    ensure_table(conn, table)?;
    Ok(())
}

/// Table names are interpolated into DDL (identifiers cannot be bound as
/// parameters), so restrict them to plain identifier characters.
pub(crate) fn validate_table_name(table: &str) -> AppResult<()> {
    let valid = !table.is_empty()
        && !table.chars().next().is_some_and(|c| c.is_ascii_digit())
        && table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidTableName(table.to_string()))
    }
}
