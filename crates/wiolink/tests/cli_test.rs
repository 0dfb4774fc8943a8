//! Integration tests for the `wiolink` CLI binary.
//!
//! Argument parsing, help output, completions and error exit codes run
//! offline; request commands run against a wiremock server.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `wiolink` binary with env isolation.
///
/// Clears all `WIOLINK_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn wiolink_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("wiolink");
    cmd.env("HOME", "/tmp/wiolink-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/wiolink-cli-test-nonexistent")
        .env_remove("WIOLINK_PROFILE")
        .env_remove("WIOLINK_REGION")
        .env_remove("WIOLINK_BASE_URL")
        .env_remove("WIOLINK_TOKEN")
        .env_remove("WIOLINK_OUTPUT")
        .env_remove("WIOLINK_INSECURE")
        .env_remove("WIOLINK_TIMEOUT")
        .env_remove("WIOLINK_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Like [`wiolink_cmd`], with config directories rooted at `home`.
fn wiolink_cmd_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = wiolink_cmd();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Write `contents` to the config file the binary resolves under `home`.
fn write_config_in(home: &Path, contents: &str) -> PathBuf {
    let output = wiolink_cmd_in(home).args(["config", "path"]).output().unwrap();
    assert!(output.status.success());
    let path = PathBuf::from(serde_json::from_slice::<String>(&output.stdout).unwrap());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run_blocking(args: Vec<String>) -> std::process::Output {
    tokio::task::spawn_blocking(move || wiolink_cmd().args(&args).output().unwrap())
        .await
        .unwrap()
}

fn base_url(server: &MockServer) -> String {
    format!("{}/v1/", server.uri())
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = wiolink_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    wiolink_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Wio Link")
            .and(predicate::str::contains("nodes"))
            .and(predicate::str::contains("cotf"))
            .and(predicate::str::contains("custom")),
    );
}

#[test]
fn test_version_flag() {
    wiolink_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiolink"));
}

#[test]
fn test_completions_bash() {
    wiolink_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Offline errors ──────────────────────────────────────────────────

#[test]
fn test_invalid_region_is_usage_error() {
    wiolink_cmd()
        .args(["--region", "eu", "--token", "t", "boards", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("region"));
}

#[test]
fn test_missing_token() {
    wiolink_cmd()
        .args(["nodes", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No user token"));
}

#[test]
fn test_config_path() {
    wiolink_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Config files ────────────────────────────────────────────────────

#[test]
fn test_config_init_keeps_existing_profiles() {
    let home = tempfile::tempdir().unwrap();
    let path = write_config_in(
        home.path(),
        "[profiles.lab]\nuser_token = \"precious\"\n\n[profiles.cn]\nregion = \"CN\"\n",
    );

    wiolink_cmd_in(home.path())
        .args(["config", "init", "--name", "new", "--node-token", "n"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("precious"), "lab token lost:\n{saved}");
    assert!(saved.contains("[profiles.cn]"), "cn profile lost:\n{saved}");
    assert!(saved.contains("[profiles.new]"), "new profile missing:\n{saved}");
}

#[test]
fn test_unreadable_config_is_not_overwritten() {
    let home = tempfile::tempdir().unwrap();
    let original = "[profiles.lab]\nuser_token = \"precious\"\n\n[profiles.bad]\nregion = \"eu\"\n";
    let path = write_config_in(home.path(), original);

    wiolink_cmd_in(home.path())
        .args(["config", "init", "--name", "new", "--node-token", "n"])
        .assert()
        .code(1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);

    wiolink_cmd_in(home.path())
        .args(["nodes", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No user token").not());
}

// ── Requests against a mock server ──────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_nodes_list_prints_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/nodes/list"))
        .and(header("authorization", "token u-tok"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "nodes": [{ "name": "garden", "node_sn": "sn1" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run_blocking(vec![
        "--base-url".into(),
        base_url(&server),
        "--token".into(),
        "u-tok".into(),
        "-o".into(),
        "json-compact".into(),
        "nodes".into(),
        "list".into(),
    ])
    .await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"nodes":[{"name":"garden","node_sn":"sn1"}]}"#
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_var_posts_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/node/variable/led/1"))
        .and(header("authorization", "token n-tok"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_blocking(vec![
        "--base-url".into(),
        base_url(&server),
        "--token".into(),
        "n-tok".into(),
        "cotf".into(),
        "set-var".into(),
        "led".into(),
        "1".into(),
    ])
    .await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"result\": \"ok\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "code": 1001, "message": "x" })),
        )
        .mount(&server)
        .await;

    let output = run_blocking(vec![
        "--base-url".into(),
        base_url(&server),
        "--token".into(),
        "n-tok".into(),
        "node".into(),
        "read".into(),
        "grove1".into(),
        "temperature".into(),
        "c".into(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1001"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_token_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "error": "Please login with valid token" })),
        )
        .mount(&server)
        .await;

    let output = run_blocking(vec![
        "--base-url".into(),
        base_url(&server),
        "--token".into(),
        "stale".into(),
        "boards".into(),
        "list".into(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(3));
}
