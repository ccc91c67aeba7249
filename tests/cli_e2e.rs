//! End-to-end CLI tests for the update-fetch binary.

use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("update-fetch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Download a single file"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("update-fetch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that missing positional arguments are a usage error.
#[test]
fn test_binary_missing_arguments_returns_error() {
    let mut cmd = Command::cargo_bin("update-fetch").unwrap();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_downloads_file() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/atr.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"3B 8F 80 01"))
        .mount(&mock_server)
        .await;
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("nested").join("atr.txt");
    let url = format!("{}/atr.txt", mock_server.uri());
    let dest_arg = destination.clone();

    let output = tokio::task::spawn_blocking(move || {
        Command::cargo_bin("update-fetch")
            .unwrap()
            .arg("-q")
            .arg(url)
            .arg(dest_arg)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output.assert().success();
    assert_eq!(std::fs::read(&destination).unwrap(), b"3B 8F 80 01");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_http_error_exits_nonzero_without_file() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("atr.txt");
    let url = format!("{}/gone", mock_server.uri());
    let dest_arg = destination.clone();

    let output = tokio::task::spawn_blocking(move || {
        Command::cargo_bin("update-fetch")
            .unwrap()
            .arg("-q")
            .arg(url)
            .arg(dest_arg)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("HTTP 404"));
    assert!(!destination.exists());
}
