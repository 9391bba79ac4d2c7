//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn waveboard() -> Command {
    let mut cmd = Command::cargo_bin("waveboard").expect("binary builds");
    // Keep tests hermetic: no ambient credentials or user config
    cmd.env_remove("DEEPGRAM_API_KEY");
    cmd
}

#[test]
fn no_files_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    waveboard()
        .env("XDG_CONFIG_HOME", dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No file selected"));
}

#[test]
fn missing_api_key_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    waveboard()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("some.wav")
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn config_get_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    waveboard()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_then_get_roundtrips() {
    let dir = tempfile::tempdir().unwrap();

    waveboard()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "language", "es"])
        .assert()
        .success();

    waveboard()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "language"])
        .assert()
        .success()
        .stdout(predicate::str::contains("es"));
}

#[test]
fn config_set_rejects_bad_page_size() {
    let dir = tempfile::tempdir().unwrap();
    waveboard()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "page_size", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn config_path_points_into_waveboard_dir() {
    let dir = tempfile::tempdir().unwrap();
    waveboard()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("waveboard"));
}

#[test]
fn unreadable_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    waveboard()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("DEEPGRAM_API_KEY", "test-key")
        .arg(dir.path().join("missing.wav"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.wav"));
}
