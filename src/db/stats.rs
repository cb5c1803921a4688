use crate::db::pool::DbPool;
use crate::db::queries::count_records;
use crate::db::schema::{table_exists, validate_table_name};
use crate::errors::AppResult;
use crate::ui::messages::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str, table: &str) -> AppResult<()> {
    validate_table_name(table)?;
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    if !table_exists(&pool.conn, table)? {
        println!("{}• Table '{}':{} {}not created yet{}", CYAN, table, RESET, GREY, RESET);
        println!();
        return Ok(());
    }

    //
    // 2) TOTAL ROWS
    //
    let count = count_records(&pool.conn, table)?;
    println!("{}• Total rows:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) YEAR RANGE
    //
    // MIN/MAX yield a single all-NULL row on an empty table
    let range: (Option<i64>, Option<i64>) = pool.conn.query_row(
        &format!("SELECT MIN(ev), MAX(ev) FROM {table}"),
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    match range {
        (Some(first), Some(last)) => {
            println!("{}• Year range:{} {} to {}", CYAN, RESET, first, last);
        }
        _ => {
            println!("{}• Year range:{} {}--{}", CYAN, RESET, GREY, RESET);
        }
    }

    //
    // 4) OUTPUT TOTALS
    //
    if count > 0 {
        let (gold, silver, diamond): (i64, i64, i64) = pool.conn.query_row(
            &format!(
                "SELECT COALESCE(SUM(aranytermeles), 0),
                        COALESCE(SUM(ezusttermeles), 0),
                        COALESCE(SUM(gyemanttermeles), 0)
                 FROM {table}"
            ),
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

        println!("{}• Total gold:{}    {}", CYAN, RESET, gold);
        println!("{}• Total silver:{}  {}", CYAN, RESET, silver);
        println!("{}• Total diamond:{} {}", CYAN, RESET, diamond);
    }

    println!();
    Ok(())
}
