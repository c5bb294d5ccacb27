//! CLI module - Command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod add;
pub mod clear;
pub mod count;
pub mod delete;
pub mod export;
pub mod list;
pub mod search;

/// jot - Plain-text personal notes manager
///
/// Notes live as delimited records in a single text file.
#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "JOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Notes file path (overrides config)
    #[arg(long, global = true, env = "JOT_NOTES_FILE")]
    pub notes_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add(add::AddArgs),

    /// List all notes
    List(list::ListArgs),

    /// Search notes by keyword
    Search(search::SearchArgs),

    /// Delete a note by title
    Delete(delete::DeleteArgs),

    /// Count stored notes
    Count(count::CountArgs),

    /// Delete all notes
    Clear(clear::ClearArgs),

    /// Export notes to a timestamped backup file
    Export(export::ExportArgs),
}
