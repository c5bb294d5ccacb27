//! Side error-record file
//!
//! I/O failures that reach the command boundary are appended here as text
//! blocks, best-effort. A failure to write the log itself is the caller's
//! problem to swallow.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;

use super::note::{separator, TIMESTAMP_FORMAT};

/// Append-only error-record writer.
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one error block:
    ///
    /// ```text
    /// === ERROR LOG ===
    /// Timestamp: <YYYY-MM-DD HH:mm:ss>
    /// Exception: <io::ErrorKind>
    /// Message: <detail>
    /// Stack Trace:
    /// 	at <operation>
    ///
    /// <50 dashes>
    /// <blank line>
    /// ```
    pub fn append(&self, operation: &str, err: &io::Error) -> io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);

        let mut entry = String::new();
        entry.push_str("=== ERROR LOG ===\n");
        entry.push_str(&format!("Timestamp: {timestamp}\n"));
        entry.push_str(&format!("Exception: {:?}\n", err.kind()));
        entry.push_str(&format!("Message: {err}\n"));
        entry.push_str("Stack Trace:\n");
        entry.push_str(&format!("\tat {operation}\n"));
        entry.push_str(&format!("\n{}\n\n", separator()));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())
    }
}
