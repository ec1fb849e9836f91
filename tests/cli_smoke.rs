#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests run the `docqa` binary with an isolated config file so the
//! user's own settings never leak in.

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use common::unreachable_url;

#[allow(deprecated)]
fn docqa(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("docqa").unwrap();
    cmd.env_remove("API_URL")
        .env_remove("DOCQA_CONFIG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config_dir.path().join("config.toml"));
    cmd
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("config.toml"), content).unwrap();
}

#[test]
fn test_help_displays_usage() {
    let temp_dir = TempDir::new().unwrap();
    docqa(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ask questions about your legal documents"))
        .stdout(predicate::str::contains("--api-url"))
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("ask"));
}

#[test]
fn test_version_displays_version() {
    let temp_dir = TempDir::new().unwrap();
    docqa(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_samples_lists_defaults() {
    let temp_dir = TempDir::new().unwrap();
    docqa(&temp_dir)
        .arg("samples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample documents"))
        .stdout(predicate::str::contains("Case 1 Sample"))
        .stdout(predicate::str::contains("Case 3 Sample"));
}

#[test]
fn test_samples_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir,
        r#"
[samples]
"Lease Dispute" = "docs/lease.pdf"
"#,
    );

    docqa(&temp_dir)
        .arg("samples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lease Dispute"))
        .stdout(predicate::str::contains("Case 1 Sample").not());
}

#[test]
fn test_config_shows_default_url() {
    let temp_dir = TempDir::new().unwrap();
    docqa(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8000"))
        .stdout(predicate::str::contains("not found, using defaults"));
}

#[test]
fn test_api_url_env_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir,
        r#"
[backend]
url = "http://from-file:9000"
"#,
    );

    docqa(&temp_dir)
        .env("API_URL", "http://from-env:7000")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-env:7000"));
}

#[test]
fn test_api_url_flag_overrides_env() {
    let temp_dir = TempDir::new().unwrap();
    docqa(&temp_dir)
        .env("API_URL", "http://from-env:7000")
        .args(["--api-url", "http://from-flag:6000", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-flag:6000"))
        .stdout(predicate::str::contains("from-env").not());
}

#[test]
fn test_invalid_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_config(&temp_dir, "[backend\nurl = ");

    docqa(&temp_dir).arg("config").assert().failure();
}

#[test]
fn test_upload_without_documents_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    docqa(&temp_dir)
        .args(["upload", "--sample", "None"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains(
            "Please upload at least one PDF or choose a sample.",
        ));
}

#[test]
fn test_upload_missing_file_is_noinput() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nowhere.pdf");

    docqa(&temp_dir)
        .arg("upload")
        .arg(&missing)
        .assert()
        .code(exitcode::NOINPUT);
}

#[test]
fn test_ask_requires_query() {
    let temp_dir = TempDir::new().unwrap();
    docqa(&temp_dir).arg("ask").assert().failure();
}

#[test]
fn test_ask_unreachable_backend_reports_failure() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        &temp_dir,
        "[retry]\nmax_attempts = 1\nbackoff_secs = 0\n",
    );

    docqa(&temp_dir)
        .args(["--api-url", &unreachable_url(), "ask", "Is", "this", "binding?"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains(
            "An error occurred while retrieving the response.",
        ));
}
