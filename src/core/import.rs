//! High-level import pipeline: load the CSV, guarantee the schema, insert
//! the rows. Nothing here runs at module load; the CLI dispatcher (or a
//! test) calls `run_import` explicitly.

use crate::db::pool::DbPool;
use crate::db::{queries, schema};
use crate::errors::AppResult;
use crate::loader;

pub const DEFAULT_TABLE: &str = "termeles";

/// Result of one import run.
pub struct ImportSummary {
    pub loaded: usize,
    pub inserted: usize,
}

/// Run the full pipeline against one CSV file.
///
/// `reset` selects the destructive schema policy (drop then create); the
/// default leaves existing rows intact. The schema stage and the insert
/// stage each open their own connection, released when the stage ends.
pub fn run_import(
    csv_path: &str,
    db_path: &str,
    table: &str,
    reset: bool,
) -> AppResult<ImportSummary> {
    // 1) load and normalize the CSV
    let records = loader::load_csv(csv_path)?;

    // 2) guarantee the destination table
    {
        let pool = DbPool::new(db_path)?;
        if reset {
            schema::reset_table(&pool.conn, table)?;
        } else {
            schema::ensure_table(&pool.conn, table)?;
        }
    }

    // 3) insert all rows in one transaction
    let inserted = {
        let mut pool = DbPool::new(db_path)?;
        queries::insert_records(&mut pool.conn, table, &records)?
    };

    Ok(ImportSummary {
        loaded: records.len(),
        inserted,
    })
}
