//! Shared test fixtures for the estimation-decks integration tests.
//!
//! Provides helpers for writing deck definition JSON files into a temp
//! directory. Callers must keep the returned `TempDir` alive for the
//! duration of the test so the files are not deleted prematurely.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write raw file contents under a fresh temp directory.
///
/// Returns `(TempDir, PathBuf)`; the caller must keep the `TempDir` alive.
pub fn write_decks_file(contents: &str) -> (TempDir, PathBuf) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("decks.json");
    fs::write(&path, contents).unwrap();
    (tmp_dir, path)
}

/// Write a deck definition file built from `(name, cards)` pairs.
pub fn write_decks(decks: &[(&str, &[&str])]) -> (TempDir, PathBuf) {
    let mut doc = serde_json::Map::new();
    for (name, cards) in decks {
        doc.insert(
            name.to_string(),
            serde_json::json!({ "name": name, "cards": cards }),
        );
    }
    let contents = serde_json::to_string_pretty(&serde_json::Value::Object(doc)).unwrap();
    write_decks_file(&contents)
}
