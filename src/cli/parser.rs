use clap::{Parser, Subcommand};

/// Command-line interface definition for oreimport
/// CLI application to load mine production CSV reports into SQLite
#[derive(Parser)]
#[command(
    name = "oreimport",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple CSV import CLI: load mine production reports into SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Import a production CSV file into the database
    Import {
        /// Path to the ';'-separated CSV file
        file: String,

        #[arg(long, help = "Destination table (defaults to the configured table)")]
        table: Option<String>,

        #[arg(
            long,
            help = "Drop and recreate the table before inserting (erases prior contents)"
        )]
        reset: bool,
    },

    /// List stored production rows
    List {
        #[arg(long, help = "Table to read (defaults to the configured table)")]
        table: Option<String>,

        #[arg(long, help = "Filter rows by production year")]
        year: Option<i64>,
    },

    /// Manage the database (integrity checks, statistics, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },
}
