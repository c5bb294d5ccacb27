//! NoteStore - flat-file backend
//!
//! All notes live in a single plain-text file as delimited records
//! (see [`super::note`] for the framing).
//!
//! # Key Points
//! - Adds append one framed record and sync before returning
//! - list/search/count stream the file on every call, nothing is cached
//! - delete/clear rewrite the file in place (truncate + write, not atomic)

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::debug;

use super::note::{self, Note};

/// Errors returned by [`NoteStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required input was empty after trimming.
    #[error("{field} cannot be empty")]
    Validation { field: &'static str },

    /// The delete target is not present in the store.
    #[error("note with title '{title}' not found")]
    NotFound { title: String },

    /// Underlying file I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Outcome of a [`NoteStore::clear`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Confirmation accepted, store emptied.
    Cleared,
    /// Confirmation declined, store untouched.
    Cancelled,
}

/// Flat-file note store.
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Open a store at the given backing file, creating an empty file
    /// (and parent directories) when missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            File::create(&path)?;
            debug!(path = %path.display(), "created notes file");
        }

        Ok(Self { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a new note. Duplicate titles are not rejected; delete
    /// resolves them first-match-wins.
    pub fn add(&self, title: &str, body: &str) -> Result<Note, StoreError> {
        let title = title.trim();
        let body = body.trim();

        if title.is_empty() {
            return Err(StoreError::Validation { field: "title" });
        }
        if body.is_empty() {
            return Err(StoreError::Validation { field: "content" });
        }

        let note = Note::new(title, body);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(note.render().as_bytes())?;
        file.sync_all()?;

        debug!(title = %note.title, "note appended");
        Ok(note)
    }

    /// Raw file contents, line by line, in file order. A missing backing
    /// file reads as an empty store.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        self.read_lines()
    }

    /// Whole records whose full text contains the keyword,
    /// case-insensitively. Each match is returned verbatim, delimiter line
    /// included, every line newline-suffixed.
    ///
    /// A record's buffer runs to the next delimiter line, not to the
    /// record's own blank terminator; blank lines and any stray text
    /// between records accumulate onto the preceding record.
    pub fn search(&self, keyword: &str) -> Result<Vec<String>, StoreError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(StoreError::Validation { field: "keyword" });
        }
        let needle = keyword.to_lowercase();

        let mut matches = Vec::new();
        let mut current = String::new();
        let mut in_note = false;

        for line in self.read_lines()? {
            if note::is_delimiter(&line) {
                if in_note && current.to_lowercase().contains(&needle) {
                    matches.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push_str(&line);
                current.push('\n');
                in_note = true;
            } else if in_note {
                current.push_str(&line);
                current.push('\n');
            }
        }

        if in_note && current.to_lowercase().contains(&needle) {
            matches.push(current);
        }

        Ok(matches)
    }

    /// Delete the first record whose title matches case-insensitively.
    /// The file is only rewritten on a match; a miss leaves it untouched.
    pub fn delete(&self, title: &str) -> Result<(), StoreError> {
        let target = title.trim();
        if target.is_empty() {
            return Err(StoreError::Validation { field: "title" });
        }
        let target_lower = target.to_lowercase();

        let mut retained = Vec::new();
        let mut found = false;

        let mut lines = self.read_lines()?.into_iter();
        while let Some(line) = lines.next() {
            if let Some(note_title) = note::parse_title(&line) {
                if note_title.to_lowercase() == target_lower {
                    found = true;
                    // drop everything through the record's blank terminator
                    for skipped in lines.by_ref() {
                        if skipped.is_empty() {
                            break;
                        }
                    }
                    continue;
                }
            }
            retained.push(line);
        }

        if !found {
            return Err(StoreError::NotFound {
                title: target.to_string(),
            });
        }

        // in-place rewrite; a crash mid-write leaves a partial file
        let mut out = String::new();
        for line in &retained {
            out.push_str(line);
            out.push('\n');
        }
        fs::write(&self.path, out)?;

        debug!(title = %target, retained = retained.len(), "note deleted");
        Ok(())
    }

    /// Number of records, counted by delimiter lines.
    pub fn count(&self) -> Result<usize, StoreError> {
        let count = self
            .read_lines()?
            .iter()
            .filter(|line| note::is_delimiter(line))
            .count();
        Ok(count)
    }

    /// Empty the store, gated on the caller's confirmation answer:
    /// `y`/`yes` (case-insensitive) clears, anything else is a no-op.
    pub fn clear(&self, confirmation: &str) -> Result<ClearOutcome, StoreError> {
        let answer = confirmation.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            return Ok(ClearOutcome::Cancelled);
        }

        File::create(&self.path)?;
        debug!("store cleared");
        Ok(ClearOutcome::Cleared)
    }

    /// Copy the backing file to a timestamped backup alongside it.
    /// Two exports within the same second collide on the name and the
    /// later one overwrites.
    pub fn export(&self) -> Result<PathBuf, StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.export_into(&dir)
    }

    /// Copy the backing file to a timestamped backup in the given
    /// directory, overwriting any existing file of that name.
    pub fn export_into(&self, dir: &Path) -> Result<PathBuf, StoreError> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let target = dir.join(format!("notes_backup_{stamp}.txt"));

        fs::copy(&self.path, &target)?;

        debug!(target = %target.display(), "notes exported");
        Ok(target)
    }

    fn read_lines(&self) -> Result<Vec<String>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines)
    }
}
