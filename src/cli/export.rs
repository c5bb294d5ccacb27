//! `jot export` command
//!
//! Copies the notes file verbatim to `notes_backup_<stamp>.txt`.
//!
//! # Usage
//! ```bash
//! jot export
//! jot export --dir backups/
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::config::Config;
use crate::core::store::NoteStore;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination directory (default: from config, else alongside the notes file)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

pub fn run(args: ExportArgs, store: &NoteStore, config: &Config) -> Result<()> {
    let target = match args.dir.as_deref().or(config.export.dir.as_deref()) {
        Some(dir) => store.export_into(dir)?,
        None => store.export()?,
    };

    println!(
        "{} Notes exported to: {}",
        "✓".green(),
        target.display().to_string().cyan()
    );
    Ok(())
}
