//! `jot search` command
//!
//! Prints every record whose full text contains the keyword,
//! case-insensitively.
//!
//! # Usage
//! ```bash
//! jot search report
//! jot search "eggs"
//! ```

use anyhow::Result;
use clap::Args;

use crate::core::store::NoteStore;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search keyword (case-insensitive)
    pub keyword: String,
}

pub fn run(args: SearchArgs, store: &NoteStore) -> Result<()> {
    let matches = store.search(&args.keyword)?;

    if matches.is_empty() {
        println!("No notes found containing: {}", args.keyword.trim());
        return Ok(());
    }

    for record in matches {
        println!("{record}");
    }

    Ok(())
}
