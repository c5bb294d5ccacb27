//! `jot add` command
//!
//! Appends a new note to the notes file.
//!
//! # Usage
//! ```bash
//! jot add "Groceries" "Milk, eggs, bread"
//! jot add "Meeting notes" --file agenda.txt
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use crate::core::store::NoteStore;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note content (omit when using --file)
    pub content: Option<String>,

    /// Read content from a file
    #[arg(short = 'f', long, conflicts_with = "content")]
    pub file: Option<PathBuf>,
}

pub fn run(args: AddArgs, store: &NoteStore) -> Result<()> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            bail!("Content is required. Pass it as the second argument or use --file.")
        }
    };

    let note = store.add(&args.title, &content)?;

    println!("{} Note added: {}", "✓".green(), note.title.cyan().bold());
    Ok(())
}
