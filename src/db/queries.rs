//! Row-level access to the production table.

use crate::db::schema::validate_table_name;
use crate::errors::AppResult;
use crate::models::record::ProductionRecord;
use rusqlite::{Connection, Result, Row, params};

/// Insert all records inside a single transaction.
///
/// `azon` is never supplied; SQLite assigns it. Missing gold/silver values
/// fall back to 0. A failure anywhere rolls back the whole batch.
pub fn insert_records(
    conn: &mut Connection,
    table: &str,
    records: &[ProductionRecord],
) -> AppResult<usize> {
    validate_table_name(table)?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {table}
                 (ev, honap, nap, aranytermeles, ezusttermeles, gyemanttermeles)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
        ))?;

        for rec in records {
            stmt.execute(params![
                rec.year,
                rec.month,
                rec.day,
                rec.gold.unwrap_or(0),
                rec.silver.unwrap_or(0),
                rec.diamond,
            ])?;
        }
    }
    tx.commit()?;

    Ok(records.len())
}

/// Load stored rows in insertion order, optionally filtered by year.
pub fn load_records(
    conn: &Connection,
    table: &str,
    year: Option<i64>,
) -> AppResult<Vec<ProductionRecord>> {
    validate_table_name(table)?;

    let mut out = Vec::new();

    match year {
        Some(y) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT * FROM {table} WHERE ev = ?1 ORDER BY azon ASC"
            ))?;
            let rows = stmt.query_map([y], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!("SELECT * FROM {table} ORDER BY azon ASC"))?;
            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn count_records(conn: &Connection, table: &str) -> AppResult<i64> {
    validate_table_name(table)?;

    let count: i64 =
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(count)
}

pub fn map_row(row: &Row) -> Result<ProductionRecord> {
    Ok(ProductionRecord {
        azon: row.get("azon")?,
        year: row.get("ev")?,
        month: row.get("honap")?,
        day: row.get("nap")?,
        gold: row.get("aranytermeles")?,
        silver: row.get("ezusttermeles")?,
        diamond: row.get("gyemanttermeles")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::ensure_table;
    use rusqlite::Connection;

    fn sample(year: i64, month: i64, day: i64, diamond: i64) -> ProductionRecord {
        ProductionRecord::new(year, month, day, None, None, diamond)
    }

    #[test]
    fn insert_defaults_missing_outputs_to_zero() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_table(&conn, "termeles").unwrap();

        insert_records(&mut conn, "termeles", &[sample(2020, 3, 5, 12)]).unwrap();

        let rows = load_records(&conn, "termeles", None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gold, Some(0));
        assert_eq!(rows[0].silver, Some(0));
        assert_eq!(rows[0].diamond, 12);
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_table(&conn, "termeles").unwrap();

        let records = vec![sample(2020, 1, 1, 1), sample(2020, 1, 2, 2)];
        let n = insert_records(&mut conn, "termeles", &records).unwrap();
        assert_eq!(n, 2);

        let rows = load_records(&conn, "termeles", None).unwrap();
        assert_eq!(rows[0].azon, 1);
        assert_eq!(rows[1].azon, 2);
    }

    #[test]
    fn duplicate_rows_are_inserted_again() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_table(&conn, "termeles").unwrap();

        let records = vec![sample(2020, 3, 5, 12)];
        insert_records(&mut conn, "termeles", &records).unwrap();
        insert_records(&mut conn, "termeles", &records).unwrap();

        assert_eq!(count_records(&conn, "termeles").unwrap(), 2);
    }

    #[test]
    fn mid_batch_failure_rolls_back_whole_batch() {
        let mut conn = Connection::open_in_memory().unwrap();

        // same shape as ensure_table, plus a constraint the second row violates
        conn.execute_batch(
            "CREATE TABLE termeles (
                azon            INTEGER PRIMARY KEY AUTOINCREMENT,
                ev              INTEGER,
                honap           INTEGER,
                nap             INTEGER,
                aranytermeles   BIGINT DEFAULT 0,
                ezusttermeles   BIGINT DEFAULT 0,
                gyemanttermeles BIGINT CHECK (gyemanttermeles >= 0)
            );",
        )
        .unwrap();

        let records = vec![sample(2020, 1, 1, 1), sample(2020, 1, 2, -2)];
        let result = insert_records(&mut conn, "termeles", &records);

        assert!(result.is_err());
        // the valid first row must not survive the failed batch
        assert_eq!(count_records(&conn, "termeles").unwrap(), 0);
    }

    #[test]
    fn load_records_filters_by_year() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_table(&conn, "termeles").unwrap();

        let records = vec![sample(2019, 5, 1, 1), sample(2020, 5, 1, 2), sample(2020, 6, 1, 3)];
        insert_records(&mut conn, "termeles", &records).unwrap();

        let rows = load_records(&conn, "termeles", Some(2020)).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.year == 2020));
    }
}
