//! End-to-end tests for the `jot` binary.
//!
//! Each test runs in its own temp directory; the store defaults to
//! `notes.txt` in the working directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn jot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jot").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn add_then_list_roundtrip() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added"));

    jot(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Groceries ==="))
        .stdout(predicate::str::contains("Milk, eggs, bread"));
}

#[test]
fn list_empty_store_prints_hint() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[test]
fn count_reports_total() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();
    jot(&dir)
        .args(["add", "Todo", "Finish report"])
        .assert()
        .success();

    jot(&dir)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total notes: 2"));
}

#[test]
fn search_returns_only_matching_record() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();
    jot(&dir)
        .args(["add", "Todo", "Finish report"])
        .assert()
        .success();

    jot(&dir)
        .args(["search", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Todo ==="))
        .stdout(predicate::str::contains("=== Groceries ===").not());
}

#[test]
fn search_miss_reports_keyword() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();

    jot(&dir)
        .args(["search", "quantum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found containing: quantum"));
}

#[test]
fn delete_removes_record() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();
    jot(&dir)
        .args(["add", "Todo", "Finish report"])
        .assert()
        .success();

    jot(&dir)
        .args(["delete", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted"));

    jot(&dir)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total notes: 1"));

    jot(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Todo ==="))
        .stdout(predicate::str::contains("=== Groceries ===").not());
}

#[test]
fn delete_missing_title_fails_and_leaves_file() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();
    let before = fs::read(dir.path().join("notes.txt")).unwrap();

    jot(&dir)
        .args(["delete", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    let after = fs::read(dir.path().join("notes.txt")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn add_empty_title_fails() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "   ", "content"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title cannot be empty"));
}

#[test]
fn clear_declined_keeps_notes() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();

    jot(&dir)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    jot(&dir)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total notes: 1"));
}

#[test]
fn clear_confirmed_empties_store() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();

    jot(&dir)
        .arg("clear")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All notes cleared."));

    jot(&dir)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total notes: 0"));
}

#[test]
fn clear_with_yes_flag_skips_prompt() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();

    jot(&dir)
        .args(["clear", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All notes cleared."));
}

#[test]
fn export_writes_backup_copy() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["add", "Groceries", "Milk, eggs, bread"])
        .assert()
        .success();

    jot(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes exported to:"));

    let backup = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("notes_backup_")
        })
        .expect("backup file present");

    let original = fs::read(dir.path().join("notes.txt")).unwrap();
    assert_eq!(fs::read(backup.path()).unwrap(), original);
}

#[test]
fn notes_file_override_is_honored() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .args(["--notes-file", "journal.txt", "add", "Todo", "Finish report"])
        .assert()
        .success();

    assert!(dir.path().join("journal.txt").exists());
    assert!(!dir.path().join("notes.txt").exists());
}

#[cfg(unix)]
#[test]
fn io_failure_is_appended_to_error_log() {
    let dir = TempDir::new().unwrap();

    // a directory in place of the notes file makes every read fail
    fs::create_dir(dir.path().join("notes.txt")).unwrap();

    jot(&dir).arg("list").assert().failure();

    let log = fs::read_to_string(dir.path().join("error_log.txt")).unwrap();
    assert!(log.contains("=== ERROR LOG ==="));
    assert!(log.contains("at jot::cli::list"));
}
