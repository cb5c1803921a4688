//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! Opening the connection creates the database file when it does not exist
//! yet; dropping the pool releases the connection on every exit path.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
