//! `jot count` command
//!
//! # Usage
//! ```bash
//! jot count
//! ```

use anyhow::Result;
use clap::Args;

use crate::core::store::NoteStore;

#[derive(Args, Debug)]
pub struct CountArgs {}

pub fn run(_args: CountArgs, store: &NoteStore) -> Result<()> {
    let count = store.count()?;
    println!("Total notes: {count}");
    Ok(())
}
