use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;

/// Handle the `config` command: show the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        let file = Config::config_file();

        if *path {
            println!("{}", file.display());
        }

        if *print_config {
            if file.exists() {
                let content = fs::read_to_string(&file)
                    .map_err(|e| AppError::Config(format!("cannot read {}: {}", file.display(), e)))?;
                println!("{}", content);
            } else {
                info("No configuration file found, using defaults:");
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(format!("cannot render defaults: {}", e)))?;
                println!("{}", yaml);
            }
        }
    }

    Ok(())
}
