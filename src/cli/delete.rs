//! `jot delete` command
//!
//! Removes the first record whose title matches, case-insensitively.
//!
//! # Usage
//! ```bash
//! jot delete "Groceries"
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::core::store::NoteStore;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Title of the note to delete
    pub title: String,
}

pub fn run(args: DeleteArgs, store: &NoteStore) -> Result<()> {
    store.delete(&args.title)?;

    println!("{} Note deleted: {}", "✓".green(), args.title.trim());
    Ok(())
}
