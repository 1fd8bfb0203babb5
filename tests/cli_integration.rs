//! CLI integration tests
//!
//! End-to-end tests for the binary using assert_cmd.

mod common;

use assert_cmd::prelude::*;
use assert_cmd::Command;
use common::{prediction_body, sample_bytes, write_sample};
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get the rng-analyzer binary with an isolated environment
fn analyzer_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rng-analyzer").unwrap();
    cmd.current_dir(data_dir.path())
        .env("RNG_ANALYZER_DATA_DIR", data_dir.path().join("data"))
        .env("NO_COLOR", "1")
        .env_remove("RNG_ANALYZER_ENDPOINT")
        .env_remove("RNG_ANALYZER_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Run a command off the async runtime so the mock server keeps serving
async fn run(mut cmd: Command) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
        .assert()
}

#[test]
fn test_version_output() {
    let dir = TempDir::new().unwrap();
    analyzer_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rng-analyzer"));
}

#[test]
fn test_help_shows_all_commands() {
    let dir = TempDir::new().unwrap();
    analyzer_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("classes"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_invalid_command() {
    let dir = TempDir::new().unwrap();
    analyzer_cmd(&dir)
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_history_list_empty() {
    let dir = TempDir::new().unwrap();
    analyzer_cmd(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Analysis History"));
}

#[test]
fn test_history_list_corrupt_slot_is_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("rng_analysis_history_v2.json"), "garbage").unwrap();

    analyzer_cmd(&dir)
        .args(["history", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"history\": []"));
}

#[test]
fn test_history_clear_requires_yes() {
    let dir = TempDir::new().unwrap();
    analyzer_cmd(&dir)
        .args(["history", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    analyzer_cmd(&dir)
        .args(["history", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));
}

#[test]
fn test_classes_lists_catalog() {
    let dir = TempDir::new().unwrap();
    analyzer_cmd(&dir)
        .arg("classes")
        .assert()
        .success()
        .stdout(predicate::str::contains("ReducedEntropy"))
        .stdout(predicate::str::contains("LCG-like Flaw"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.toml");

    analyzer_cmd(&dir)
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[service]"));
}

#[test]
fn test_config_init_with_endpoint() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("local.toml");

    analyzer_cmd(&dir)
        .args([
            "config",
            "init",
            "-o",
            config_path.to_str().unwrap(),
            "--endpoint",
            "ftp://nowhere",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("service.endpoint"));
    assert!(!config_path.exists());

    analyzer_cmd(&dir)
        .args([
            "config",
            "init",
            "-o",
            config_path.to_str().unwrap(),
            "--endpoint",
            "http://localhost:8000/predict_bin/",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("http://localhost:8000/predict_bin/"));
    assert!(!content.contains("rng-api.onrender.com"));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    analyzer_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rng-analyzer"));
}

#[test]
fn test_config_init_no_overwrite() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    analyzer_cmd(&dir)
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists"));
}

#[test]
fn test_analyze_rejects_non_bin() {
    let dir = TempDir::new().unwrap();
    let file = write_sample(dir.path(), "notes.txt", b"hello");

    analyzer_cmd(&dir)
        .args(["analyze", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file type"));
}

#[test]
fn test_analyze_rejects_invalid_endpoint() {
    let dir = TempDir::new().unwrap();
    let file = write_sample(dir.path(), "capture.bin", &sample_bytes(16));

    analyzer_cmd(&dir)
        .args(["analyze", file.to_str().unwrap(), "-e", "ftp://nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("service.endpoint"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    analyzer_cmd(&dir)
        .args(["history", "list", "-c", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_then_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(prediction_body(
            "Periodic",
            &[("Periodic", 0.9), ("Healthy", 0.1)],
        )))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_sample(dir.path(), "loop.bin", &sample_bytes(512));
    let endpoint = format!("{}/predict_bin/", server.uri());

    let mut analyze = analyzer_cmd(&dir);
    analyze.args(["analyze", file.to_str().unwrap(), "-e", &endpoint]);
    run(analyze)
        .await
        .success()
        .stdout(predicate::str::contains("Potential Vulnerability Detected"))
        .stdout(predicate::str::contains("90.00%"));

    let mut list = analyzer_cmd(&dir);
    list.args(["history", "list", "--json"]);
    run(list)
        .await
        .success()
        .stdout(predicate::str::contains("loop.bin"))
        .stdout(predicate::str::contains("Periodic"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_no_save_leaves_history_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(prediction_body("Healthy", &[("Healthy", 1.0)])),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_sample(dir.path(), "ok.bin", &sample_bytes(64));
    let endpoint = format!("{}/predict_bin/", server.uri());

    let mut analyze = analyzer_cmd(&dir);
    analyze.args(["analyze", file.to_str().unwrap(), "-e", &endpoint, "--no-save", "--json"]);
    run(analyze)
        .await
        .success()
        .stdout(predicate::str::contains("\"vulnerable\": false"));

    let mut list = analyzer_cmd(&dir);
    list.args(["history", "list"]);
    run(list)
        .await
        .success()
        .stdout(predicate::str::contains("No Analysis History"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_service_error_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(serde_json::json!({"detail": "bad file"})),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_sample(dir.path(), "bad.bin", &sample_bytes(8));
    let endpoint = format!("{}/predict_bin/", server.uri());

    let mut analyze = analyzer_cmd(&dir);
    analyze.args(["analyze", file.to_str().unwrap(), "-e", &endpoint]);
    run(analyze)
        .await
        .failure()
        .stderr(predicate::str::contains("Analysis failed: bad file"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_history_write_failure_still_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(prediction_body("Healthy", &[("Healthy", 1.0)])),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_sample(dir.path(), "ok.bin", &sample_bytes(64));
    let blocker = write_sample(dir.path(), "blocker", b"not a directory");
    let endpoint = format!("{}/predict_bin/", server.uri());

    let mut analyze = analyzer_cmd(&dir);
    analyze.args([
        "analyze",
        file.to_str().unwrap(),
        "-e",
        &endpoint,
        "--data-dir",
        blocker.to_str().unwrap(),
    ]);
    run(analyze)
        .await
        .success()
        .stdout(predicate::str::contains("Analysis Complete: Healthy"))
        .stderr(predicate::str::contains("not saved to history"));
}
