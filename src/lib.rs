//! jot - Plain-text personal notes manager
//!
//! Notes are stored as delimited records in a single text file.
//!
//! ## Key Concepts
//!
//! - **Record framing**: `=== <title> ===` delimiter line, `Created:`
//!   metadata, a 50-dash separator, body lines, one blank terminator
//! - **Append-only adds**: list/search/count re-derive their view from the
//!   file on every call; nothing is cached in memory
//! - **In-place rewrite**: delete and clear truncate and rewrite the file

pub mod cli;
pub mod config;
pub mod core;

pub use crate::config::Config;
pub use crate::core::error_log::ErrorLog;
pub use crate::core::note::Note;
pub use crate::core::store::{ClearOutcome, NoteStore, StoreError};
