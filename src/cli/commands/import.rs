use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::run_import;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `import` command: the full CSV → SQLite pipeline.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, table, reset } = cmd {
        let table = table.as_deref().unwrap_or(&cfg.default_table);

        if *reset {
            warning(format!("Resetting table '{}' before import.", table));
        }

        let summary = run_import(file, &cfg.database, table, *reset)?;

        success(format!(
            "Imported {} of {} rows from '{}' into '{}'.",
            summary.inserted, summary.loaded, file, table
        ));
    }

    Ok(())
}
