//! jot CLI - Entry point
//!
//! Usage: jot <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jot::cli::{Cli, Commands};
use jot::config::Config;
use jot::core::error_log::ErrorLog;
use jot::core::store::{NoteStore, StoreError};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let notes_file = cli
        .notes_file
        .clone()
        .unwrap_or_else(|| config.store.notes_file.clone());
    let error_log = ErrorLog::new(config.store.error_log.clone());

    let operation = command_name(&cli.command);

    // Run command
    let result = run_command(cli.command, &notes_file, &config);

    // Record I/O failures in the side error log, best-effort
    if let Err(err) = &result {
        if let Some(StoreError::Io(io_err)) = err.downcast_ref::<StoreError>() {
            if let Err(log_err) = error_log.append(operation, io_err) {
                eprintln!("Failed to log error: {log_err}");
            }
        }
    }

    result
}

fn run_command(command: Commands, notes_file: &std::path::Path, config: &Config) -> Result<()> {
    let store = NoteStore::open(notes_file)?;

    match command {
        Commands::Add(args) => jot::cli::add::run(args, &store),
        Commands::List(args) => jot::cli::list::run(args, &store),
        Commands::Search(args) => jot::cli::search::run(args, &store),
        Commands::Delete(args) => jot::cli::delete::run(args, &store),
        Commands::Count(args) => jot::cli::count::run(args, &store),
        Commands::Clear(args) => jot::cli::clear::run(args, &store),
        Commands::Export(args) => jot::cli::export::run(args, &store, config),
    }
}

/// Operation name recorded in the error side-log
fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Add(_) => "jot::cli::add",
        Commands::List(_) => "jot::cli::list",
        Commands::Search(_) => "jot::cli::search",
        Commands::Delete(_) => "jot::cli::delete",
        Commands::Count(_) => "jot::cli::count",
        Commands::Clear(_) => "jot::cli::clear",
        Commands::Export(_) => "jot::cli::export",
    }
}
