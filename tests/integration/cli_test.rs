//! Integration tests for the arx CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixtures_dir;

/// arx command isolated from the user's config file.
fn arx(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("arx").expect("Failed to find arx binary");
    cmd.env("ARX_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture() -> String {
    fixtures_dir()
        .join("conversation.md")
        .display()
        .to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let config = TempDir::new().unwrap();
    arx(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn export_without_file_shows_error() {
    let config = TempDir::new().unwrap();
    arx(&config)
        .arg("export")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<FILE>"));
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn export_writes_files_and_prints_summary() {
    let config = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    arx(&config)
        .args(["export", &fixture(), "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 artifacts"))
        .stdout(predicate::str::contains("Exported 4 script(s)"))
        .stdout(predicate::str::contains("Generated 1 doc(s)"))
        .stdout(predicate::str::contains("Wrote 7 file(s)"));

    assert!(out.path().join("src/main.ts").exists());
    assert!(out.path().join(".github/workflows/ci.yml").exists());
}

#[test]
fn export_json_summary() {
    let config = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let output = arx(&config)
        .args(["export", &fixture(), "--json", "-o"])
        .arg(out.path())
        .output()
        .expect("Failed to run arx");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["artifacts"], 2);
    assert_eq!(value["scripts"], 4);
    assert_eq!(value["docs"], 1);
    assert_eq!(value["failed"], 0);
    assert_eq!(value["written"].as_array().map(Vec::len), Some(7));
}

#[test]
fn export_dry_run_writes_nothing() {
    let config = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    arx(&config)
        .args(["export", &fixture(), "--dry-run", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("untitled-2.json"))
        .stdout(predicate::str::contains("Next_Steps.md"));

    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn export_docs_only() {
    let config = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    arx(&config)
        .args(["export", &fixture(), "--docs-only", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 6 block(s)"));

    assert!(out.path().join("docs/Next_Steps.md").exists());
    assert!(!out.path().join("scripts").exists());
}

#[test]
fn export_missing_file_exits_1() {
    let config = TempDir::new().unwrap();
    arx(&config)
        .args(["export", "does-not-exist.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.md"));
}

#[test]
fn strict_export_with_failures_exits_3() {
    let config = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(out.path().join("scripts"), "blocks the scripts dir").unwrap();

    arx(&config)
        .args(["export", &fixture(), "--strict", "-o"])
        .arg(out.path())
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Failed 4 block(s)"))
        .stderr(predicate::str::contains("Failed to create directory"));
}

#[test]
fn export_uses_config_directories() {
    let config = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(
        config.path().join("config.toml"),
        "[export]\nscripts_dir = \"bin\"\n\n[extensions]\njson = \"jsonc\"\n",
    )
    .unwrap();

    arx(&config)
        .args(["export", &fixture(), "-o"])
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("bin/untitled.jsonc").exists());
}

// ============================================================================
// List / Config Tests
// ============================================================================

#[test]
fn list_prints_planned_paths() {
    let config = TempDir::new().unwrap();
    arx(&config)
        .args(["list", &fixture()])
        .assert()
        .success()
        .stdout(predicate::str::contains("artifact  ./src/main.ts"))
        .stdout(predicate::str::contains("script    ./scripts/dev.sh"))
        .stdout(predicate::str::contains("doc       ./docs/Next_Steps.md"));
}

#[test]
fn config_show_prints_defaults() {
    let config = TempDir::new().unwrap();
    arx(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[export]"))
        .stdout(predicate::str::contains("scripts_dir = \"scripts\""));
}

#[test]
fn config_path_honors_env() {
    let config = TempDir::new().unwrap();
    arx(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn invalid_config_is_reported() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("config.toml"), "[export\n").unwrap();
    arx(&config)
        .args(["list", &fixture()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn completions_for_bash() {
    let config = TempDir::new().unwrap();
    arx(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arx"));
}
