//! Tests for CLI argument parsing against the built binary.

mod common;

use common::mock_catalog::{MockCatalog, MockResponse};
use common::temp_config;
use std::process::Command;

fn prodview_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prodview"))
}

#[test]
fn test_help_shows_overrides() {
    let output = prodview_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--page-size"));
    assert!(stdout.contains("list"));
}

#[test]
fn test_list_help_shows_sort_values() {
    let output = prodview_cmd()
        .args(["list", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("price-asc"));
    assert!(stdout.contains("alphabetical"));
}

#[test]
fn test_invalid_sort_is_rejected() {
    let output = prodview_cmd()
        .args(["list", "--sort", "random"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {stderr}");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"not-a-url\"\n");
    let output = prodview_cmd()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Config validation failed"), "got: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_sorted_page() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::products(&[
        (1, "Mug", 8.0),
        (2, "Kettle", 40.0),
        (3, "Teapot", 25.0),
    ]))
    .await;
    let (_dir, path) = temp_config("");

    let mut cmd = prodview_cmd();
    cmd.arg("--config")
        .arg(&path)
        .args(["--base-url", &mock.base_url(), "--page-size", "2"])
        .args(["list", "--sort", "price-desc"]);
    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Kettle"));
    assert!(lines[1].contains("Teapot"));
    assert_eq!(lines[2], "Page 1 of 2 (3 products)");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_reports_fetch_failure() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::error(500, "down")).await;
    let (_dir, path) = temp_config("");

    let mut cmd = prodview_cmd();
    cmd.arg("--config")
        .arg(&path)
        .args(["--base-url", &mock.base_url(), "list"]);
    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Catalog responded with HTTP 500"), "got: {stderr}");
}
