//! DbDial CLI: inspect connection settings and dialect conversions.
//!
//! # Commands
//!
//! - `dsn`: Print the driver name and DSN built for each configured database.
//! - `rewrite`: Rewrite a `?` query template into a dialect's placeholder syntax.
//! - `check`: Validate a configuration file and show each database's timezone.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

mod commands;
mod logging;

use logging::LoggingConfig;

#[derive(Parser)]
#[command(name = "dbdial")]
#[command(about = "Build connection strings and dialect queries from one configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    output: OutputFormat,

    /// Also write JSON log lines to stderr
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the DSN for each configured database
    Dsn {
        /// Path to the YAML configuration file
        #[arg(long, env = "DBDIAL_CONFIG")]
        config: PathBuf,
        /// Only print the database with this name
        #[arg(long)]
        name: Option<String>,
        /// Print passwords instead of masking them
        #[arg(long, default_value_t = false)]
        show_password: bool,
    },
    /// Rewrite `?` placeholders into a dialect's native syntax
    Rewrite {
        /// Dialect tag (mysql, oracle, sqlserver)
        #[arg(long)]
        driver: String,
        /// Query template
        query: String,
    },
    /// Validate a configuration file
    Check {
        /// Path to the YAML configuration file
        #[arg(long, env = "DBDIAL_CONFIG")]
        config: PathBuf,
    },
}

/// How command results are printed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.enable_json_logs = cli.json_logs;
    logging::init(logging)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Dsn {
            config,
            name,
            show_password,
        } => commands::dsn(&mut out, config, name.as_deref(), *show_password, cli.output)?,
        Commands::Rewrite { driver, query } => {
            commands::rewrite(&mut out, driver, query, cli.output)?
        }
        Commands::Check { config } => commands::check(&mut out, config, cli.output)?,
    }

    out.flush()?;
    Ok(())
}
