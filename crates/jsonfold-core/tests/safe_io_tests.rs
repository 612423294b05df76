// Rust guideline compliant 2026-10-16

//! Unit tests for bounded reads and atomic commits.

use jsonfold_core::{backup_path_for, commit, modified_millis, read_text, Error, MAX_FILE_SIZE};
use std::fs::{self, File};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

#[test]
fn test_read_text_returns_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("a.json");
    fs::write(&path, "{\"a\": 1}").expect("write");

    assert_eq!(read_text(&path).expect("read"), "{\"a\": 1}");
}

#[test]
fn test_read_text_rejects_oversized_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("big.json");
    let file = File::create(&path).expect("create");
    file.set_len(MAX_FILE_SIZE + 1).expect("extend sparse file");

    let err = read_text(&path).expect_err("oversized read must fail");
    match &err {
        Error::FileTooLarge {
            size_mib,
            limit_mib,
            ..
        } => {
            assert_eq!(*limit_mib, 100);
            assert!(*size_mib > 100.0);
        }
        other => panic!("unexpected error: {other}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("big.json"));
    assert!(msg.contains("100 MiB"));
}

#[test]
fn test_read_text_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = read_text(&temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_modified_millis_orders_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let old = temp_dir.path().join("old.json");
    let new = temp_dir.path().join("new.json");
    fs::write(&old, "{}").expect("write");
    fs::write(&new, "{}").expect("write");

    let base = SystemTime::now() - Duration::from_secs(3600);
    File::options()
        .write(true)
        .open(&old)
        .and_then(|f| f.set_modified(base))
        .expect("set mtime");
    File::options()
        .write(true)
        .open(&new)
        .and_then(|f| f.set_modified(base + Duration::from_secs(10)))
        .expect("set mtime");

    let old_ms = modified_millis(Some(old.as_path())).expect("old mtime");
    let new_ms = modified_millis(Some(new.as_path())).expect("new mtime");
    assert_eq!(new_ms - old_ms, 10_000);
    assert!(modified_millis(Some(temp_dir.path().join("gone.json").as_path())) < Some(old_ms));
}

#[test]
fn test_commit_creates_new_file_without_backup() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("out.json");

    let backup = commit(&output, "{\"a\":1}", true).expect("commit");
    assert_eq!(backup, None, "nothing to back up for a new file");
    assert_eq!(fs::read_to_string(&output).expect("read"), "{\"a\":1}");
    assert!(!backup_path_for(&output).exists());
}

#[test]
fn test_commit_with_backup_preserves_previous_bytes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("out.json");
    let previous = "{ \"old\" : true }  // not reformatted\n";
    fs::write(&output, previous).expect("write");

    let backup = commit(&output, "{\"new\":true}", true)
        .expect("commit")
        .expect("backup path");
    assert_eq!(backup, temp_dir.path().join("out.json.bak"));
    assert_eq!(fs::read_to_string(&backup).expect("read backup"), previous);
    assert_eq!(fs::read_to_string(&output).expect("read"), "{\"new\":true}");
}

#[test]
fn test_commit_overwrites_prior_backup() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("out.json");
    fs::write(&output, "first").expect("write");
    fs::write(backup_path_for(&output), "stale").expect("write");

    commit(&output, "second", true).expect("commit");
    assert_eq!(
        fs::read_to_string(backup_path_for(&output)).expect("read"),
        "first"
    );
}

#[test]
fn test_commit_without_backup_flag_skips_backup() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("out.json");
    fs::write(&output, "old").expect("write");

    let backup = commit(&output, "new", false).expect("commit");
    assert_eq!(backup, None);
    assert!(!backup_path_for(&output).exists());
}

#[test]
fn test_commit_leaves_no_temp_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("out.json");

    commit(&output, "{}", false).expect("commit");
    let names: Vec<String> = fs::read_dir(temp_dir.path())
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["out.json"]);
}

#[test]
fn test_commit_into_missing_directory_fails_cleanly() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("missing-dir").join("out.json");

    let result = commit(&output, "{}", false);
    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(!output.exists());
}
