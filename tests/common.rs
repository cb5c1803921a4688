#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ori() -> Command {
    cargo_bin_cmd!("oreimport")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_oreimport.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a CSV fixture inside the system temp dir and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_oreimport.csv", name));
    let csv_path = path.to_string_lossy().to_string();
    fs::write(&csv_path, content).expect("write csv fixture");
    csv_path
}

/// Three-row fixture with all columns present
pub const SAMPLE_CSV: &str = "\
Datum;arany;ezust;gyemant
5.3.2020;10;20;12,7
6.3.2020;11;21;30,1
7.3.2020;12;22;45,9
";

/// Count rows of the production table directly via rusqlite
pub fn count_rows(db_path: &str, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .expect("count rows")
}
