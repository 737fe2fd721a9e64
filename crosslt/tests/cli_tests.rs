//! End-to-end tests for the crosslt binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A crosslt invocation isolated from any user configuration.
fn crosslt(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("crosslt").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("RUST_LOG")
        .env_remove("CROSSLT_CONFIG")
        .env_remove("CROSSLT_DIALECT");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const VERTEX_SHADER: &str = "\
struct VSInput {
    float4 position : SV_position;
};
";

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    crosslt(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_tokens_text() {
    let dir = TempDir::new().unwrap();
    let shader = write_file(&dir, "vs.hlsl", VERTEX_SHADER);

    crosslt(dir.path())
        .arg("tokens")
        .arg(&shader)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1 KEYWORD_STRUCT struct\n1:8 IDENTIFIER VSInput\n"))
        .stdout(predicate::str::contains("2:5 TYPE_KEYWORD float4\n"))
        .stdout(predicate::str::contains("2:21 SEMANTIC_COLON :\n"))
        .stdout(predicate::str::ends_with("4:1 EOF\n"));
}

#[test]
fn test_tokens_json() {
    let dir = TempDir::new().unwrap();
    let shader = write_file(&dir, "a.hlsl", "output.redValue << 1;");

    let output = crosslt(dir.path())
        .args(["tokens", "--format", "json"])
        .arg(&shader)
        .output()
        .unwrap();
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<&str> = tokens
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "IDENTIFIER",
            "DOT",
            "IDENTIFIER",
            "SHIFT_LEFT",
            "INT_LITERAL",
            "SEMICOLON",
            "EOF"
        ]
    );
}

#[test]
fn test_tokens_lex_error() {
    let dir = TempDir::new().unwrap();
    let shader = write_file(&dir, "bad.hlsl", "float x;\nx = @;\n");

    crosslt(dir.path())
        .arg("tokens")
        .arg(&shader)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1001]: unexpected character '@'"))
        .stderr(predicate::str::contains("bad.hlsl:2:5"))
        .stderr(predicate::str::contains("Failed to lex:"))
        .stderr(predicate::str::contains("unexpected character").count(1));
}

#[test]
fn test_tokens_unknown_dialect() {
    let dir = TempDir::new().unwrap();
    let shader = write_file(&dir, "a.hlsl", "a");

    crosslt(dir.path())
        .args(["tokens", "--dialect", "glsl"])
        .arg(&shader)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dialect: glsl"));
}

#[test]
fn test_check_success() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.hlsl", VERTEX_SHADER);
    let b = write_file(&dir, "b.hlsl", "/* empty */\n");

    crosslt(dir.path())
        .args(["check", "--jobs", "2"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.hlsl: 10 tokens"))
        .stdout(predicate::str::contains("b.hlsl: 0 tokens"));
}

#[test]
fn test_check_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "good.hlsl", "x;");
    let bad = write_file(&dir, "bad.hlsl", "x; /* never closed");

    crosslt(dir.path())
        .arg("check")
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("good.hlsl: 2 tokens"))
        .stderr(predicate::str::contains("error[E1003]: unterminated block comment"))
        .stderr(predicate::str::contains("1 file(s) failed to lex"));
}

#[test]
fn test_config_file_sets_format() {
    let dir = TempDir::new().unwrap();
    let shader = write_file(&dir, "a.hlsl", "a");
    let config = write_file(&dir, "custom.toml", "[output]\nformat = \"json\"\n");

    crosslt(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("tokens")
        .arg(&shader)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"kind\":\"IDENTIFIER\""));
}

#[test]
fn test_config_discovered_in_current_dir() {
    let dir = TempDir::new().unwrap();
    let shader = write_file(&dir, "a.hlsl", "a");
    write_file(&dir, "crosslt.toml", "[lex]\ndialect = \"nope\"\n");

    crosslt(dir.path())
        .arg("tokens")
        .arg(&shader)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dialect: nope"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();

    crosslt(dir.path())
        .args(["--config", "absent.toml", "check", "a.hlsl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
