use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::db::schema::table_exists;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::table::{Column, Table};

/// Handle the `list` command: print stored rows as an aligned table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { table, year } = cmd {
        let table_name = table.as_deref().unwrap_or(&cfg.default_table);

        let pool = DbPool::new(&cfg.database)?;

        if !table_exists(&pool.conn, table_name)? {
            info(format!("Table '{}' does not exist yet.", table_name));
            return Ok(());
        }

        let records = load_records(&pool.conn, table_name, *year)?;

        if records.is_empty() {
            match year {
                Some(y) => info(format!("No production rows for year {}.", y)),
                None => info("No production rows stored."),
            }
            return Ok(());
        }

        match year {
            Some(y) => println!("⛏️  Production rows for year {}:\n", y),
            None => println!("⛏️  Saved production rows:\n"),
        }

        let mut out = Table::new(vec![
            Column::right("ID", 5),
            Column::left("Date", 10),
            Column::right("Gold", 8),
            Column::right("Silver", 8),
            Column::right("Diamond", 8),
        ]);

        for rec in &records {
            out.add_row(vec![
                rec.azon.to_string(),
                rec.date_str(),
                rec.gold.unwrap_or(0).to_string(),
                rec.silver.unwrap_or(0).to_string(),
                rec.diamond.to_string(),
            ]);
        }

        print!("{}", out.render());
        println!("\n{} row(s).", records.len());
    }

    Ok(())
}
