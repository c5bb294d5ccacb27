//! `jot clear` command
//!
//! Empties the notes file after confirmation.
//!
//! # Usage
//! ```bash
//! jot clear        # prompts [y/N]
//! jot clear -y     # skip the prompt
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::core::store::{ClearOutcome, NoteStore};

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

pub fn run(args: ClearArgs, store: &NoteStore) -> Result<()> {
    let confirmation = if args.yes {
        "y".to_string()
    } else {
        print!("Delete ALL notes? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        input
    };

    match store.clear(&confirmation)? {
        ClearOutcome::Cleared => println!("{} All notes cleared.", "✓".green()),
        ClearOutcome::Cancelled => println!("Cancelled."),
    }

    Ok(())
}
