//! Note - record framing
//!
//! A note is one text block in the backing file:
//!
//! ```text
//! === <title> ===
//! Created: <YYYY-MM-DD HH:mm:ss>
//! <50 dashes>
//! <body lines>
//! <blank line>
//! ```
//!
//! # Key Properties
//! - **title**: lookup key for delete, compared case-insensitively
//! - **created_at**: informational timestamp string, never parsed back
//! - **body**: free text; a blank line terminates the record

use chrono::Local;

/// Opening frame of a delimiter line.
pub const DELIMITER_PREFIX: &str = "=== ";

/// Closing frame of a delimiter line.
pub const DELIMITER_SUFFIX: &str = " ===";

/// Width of the dash separator between metadata and body.
pub const SEPARATOR_WIDTH: usize = 50;

/// Format of the `Created:` metadata timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whether a line marks the start of a record.
///
/// The length guard keeps the degenerate `=== ===` (7 chars, prefix and
/// suffix overlapping on one character) out; title extraction needs both
/// frames intact.
pub fn is_delimiter(line: &str) -> bool {
    line.len() >= DELIMITER_PREFIX.len() + DELIMITER_SUFFIX.len()
        && line.starts_with(DELIMITER_PREFIX)
        && line.ends_with(DELIMITER_SUFFIX)
}

/// Extract the title enclosed in a delimiter line, if it is one.
pub fn parse_title(line: &str) -> Option<&str> {
    if is_delimiter(line) {
        Some(&line[DELIMITER_PREFIX.len()..line.len() - DELIMITER_SUFFIX.len()])
    } else {
        None
    }
}

/// Build the delimiter line for a title.
pub fn delimiter(title: &str) -> String {
    format!("{DELIMITER_PREFIX}{title}{DELIMITER_SUFFIX}")
}

/// The dash separator line.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// A note, derived from or rendered to record text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Title (lookup key)
    pub title: String,

    /// Creation timestamp, pre-formatted
    pub created_at: String,

    /// Body text
    pub body: String,
}

impl Note {
    /// Create a note stamped with the current local time.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            body: body.into(),
        }
    }

    /// Serialize to the on-disk record block, trailing blank line included.
    pub fn render(&self) -> String {
        format!(
            "{}\nCreated: {}\n{}\n{}\n\n",
            delimiter(&self.title),
            self.created_at,
            separator(),
            self.body
        )
    }
}
