//! CLI integration tests
//!
//! Tests the rpc-probe binary end-to-end. `validate` runs against a local mock
//! server, so nothing here needs network access.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::path::Path;

fn rpc_probe() -> Command {
    Command::cargo_bin("rpc-probe").unwrap()
}

/// Command using an isolated config file
fn rpc_probe_with_config(path: &Path) -> Command {
    let mut cmd = rpc_probe();
    cmd.arg("--config").arg(path);
    cmd
}

fn healthy_server(chain_id: &str) -> MockServer {
    let server = MockServer::start();
    for (method, result) in [
        ("eth_chainId", json!(chain_id)),
        ("eth_blockNumber", json!("0x112a880")),
        ("eth_getBalance", json!("0x0")),
    ] {
        server.mock(|when, then| {
            when.method(POST).body_contains(format!("\"{}\"", method));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": result}));
        });
    }
    server
}

// ==================== Basic CLI tests ====================

#[test]
fn test_version() {
    rpc_probe()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rpc-probe"));
}

#[test]
fn test_help() {
    rpc_probe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON-RPC endpoint"));
}

#[test]
fn test_validate_help() {
    rpc_probe()
        .args(["validate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--timeout"));
}

// ==================== Validate ====================

#[test]
fn test_validate_healthy_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let server = healthy_server("0x1");

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["validate", &server.url("/"), "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/4] URL syntax"))
        .stdout(predicate::str::contains("Block 18,000,000"))
        .stdout(predicate::str::contains("Chain: Ethereum (ID 1, mainnet)"))
        .stdout(predicate::str::contains("working JSON-RPC endpoint"));
}

#[test]
fn test_validate_unknown_chain_json() {
    let dir = tempfile::tempdir().unwrap();
    let server = healthy_server("0x7a69");

    let output = rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["validate", &server.url("/"), "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["all_valid"], true);
    assert_eq!(report["chain"]["status"], "unknown");
    assert_eq!(report["chain"]["id"], 31337);
    assert_eq!(report["checks"]["block_number"]["value"], 18_000_000);
}

#[test]
fn test_validate_malformed_url() {
    let dir = tempfile::tempdir().unwrap();

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["validate", "not-a-url", "--quiet"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid URL"))
        .stdout(predicate::str::contains("Endpoint failed validation."));
}

#[test]
fn test_validate_rpc_error_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32601, "message": "boom"}}));
    });

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["validate", &server.url("/"), "-q"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ FAILED: RPC error: boom"));
}

#[test]
fn test_validate_uses_config_chains() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        r#"
[[chains]]
chain_id = 31337
name = "Anvil"
testnet = true
"#,
    )
    .unwrap();
    let server = healthy_server("0x7a69");

    rpc_probe_with_config(&config)
        .args(["validate", &server.url("/"), "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chain: Anvil (ID 31337, testnet)"));
}

#[test]
fn test_validate_invalid_output_format() {
    rpc_probe()
        .args(["validate", "http://localhost:8545", "--output", "csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

// ==================== Chains ====================

#[test]
fn test_chains_list() {
    let dir = tempfile::tempdir().unwrap();

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["chains", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ethereum"))
        .stdout(predicate::str::contains("Sepolia").not());
}

#[test]
fn test_chains_list_testnets() {
    let dir = tempfile::tempdir().unwrap();

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["chains", "list", "--testnets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sepolia"));
}

#[test]
fn test_chains_list_json() {
    let dir = tempfile::tempdir().unwrap();

    let output = rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["chains", "list", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let chains: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chains[0]["chain_id"], 1);
    assert_eq!(chains[0]["name"], "Ethereum");
}

#[test]
fn test_chains_show_hex() {
    let dir = tempfile::tempdir().unwrap();

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["chains", "show", "0x89"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Polygon Mainnet"))
        .stdout(predicate::str::contains("Chain ID:    137 (0x89)"));
}

#[test]
fn test_chains_show_unknown() {
    let dir = tempfile::tempdir().unwrap();

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["chains", "show", "31337"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the registry"));
}

// ==================== Config ====================

#[test]
fn test_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    rpc_probe_with_config(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_missing() {
    let dir = tempfile::tempdir().unwrap();

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file found"));
}

#[test]
fn test_config_set_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    rpc_probe_with_config(&config)
        .args(["config", "set-timeout", "3"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config).unwrap();
    assert!(content.contains("timeout_seconds = 3"));

    rpc_probe_with_config(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout_seconds = 3"));
}

#[test]
fn test_config_set_timeout_zero() {
    let dir = tempfile::tempdir().unwrap();

    rpc_probe_with_config(&dir.path().join("config.toml"))
        .args(["config", "set-timeout", "0"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[[chains]]\nchain_id = 0\nname = \"zero\"\n").unwrap();

    rpc_probe_with_config(&config)
        .args(["chains", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chain entry"));
}
