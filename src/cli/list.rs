//! `jot list` command
//!
//! Streams the notes file to stdout, line by line, in file order.
//!
//! # Usage
//! ```bash
//! jot list
//! ```

use anyhow::Result;
use clap::Args;

use crate::core::store::NoteStore;

#[derive(Args, Debug)]
pub struct ListArgs {}

pub fn run(_args: ListArgs, store: &NoteStore) -> Result<()> {
    let lines = store.list()?;

    if lines.is_empty() {
        println!("No notes yet. Add one:");
        println!("  jot add \"Title\" \"Content\"");
        return Ok(());
    }

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
