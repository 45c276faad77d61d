mod table;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use dailygen_core::{Config, FileEntryRepository, GenerationError, GenerationService};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "dailygen")]
#[command(about = "Record and report daily diesel, gas engine and HFO generation", long_about = None)]
struct Cli {
    /// CSV data file (overrides the configured path)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add today's readings
    Add {
        /// Diesel (L)
        #[arg(long, default_value = "", allow_negative_numbers = true)]
        diesel: String,
        /// Gas engine (kWh)
        #[arg(long, default_value = "", allow_negative_numbers = true)]
        gas: String,
        /// HFO (L)
        #[arg(long, default_value = "", allow_negative_numbers = true)]
        hfo: String,
    },
    /// Show all entries, newest first
    List,
    /// Show totals per fuel
    Summary,
    /// Write all entries to a CSV file
    Export { path: PathBuf },
    /// Merge entries from a CSV file into the data file
    Import { path: PathBuf },
    /// Open the Terminal User Interface
    Tui,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn init_tracing(level: &str, interactive: bool) -> Result<()> {
    // Anything below error would tear the alternate screen.
    let max_level = if interactive { Level::ERROR } else { parse_level(level) };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()
        .context("Failed to load configuration")?
        .with_env_overrides();
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_tracing(&config.log_level, interactive)?;
    debug!(
        config_file = ?Config::config_path(),
        data_file = %config.data_file.display(),
        log_level = %config.log_level,
        "Using configuration"
    );

    let repo = FileEntryRepository::new(&config.data_file);
    let mut service = GenerationService::open(repo)
        .with_context(|| format!("Failed to load {}", config.data_file.display()))?;

    match cli.command {
        Some(Commands::Add { diesel, gas, hfo }) => {
            match service.add_entry(&diesel, &gas, &hfo) {
                Ok(key) => println!("Entry added successfully ({})", key),
                Err(GenerationError::Validation(e)) => return Err(anyhow!(e)),
                Err(e) => return Err(anyhow!("An error occurred: {}", e)),
            }
        }
        Some(Commands::List) => {
            table::show_entries(&service.list_sorted());
        }
        Some(Commands::Summary) => {
            if service.store().is_empty() {
                println!("No data available to display");
            } else {
                table::show_summary(&service.totals()?);
            }
        }
        Some(Commands::Export { path }) => {
            let written = service.export_to(&path)?;
            println!("Report exported to {}", written.display());
        }
        Some(Commands::Import { path }) => {
            let count = service
                .import_from(&path)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            println!("Data imported successfully ({} entries)", count);
        }
        Some(Commands::Tui) | None => {
            tui::run(service)?;
        }
    }
    Ok(())
}
