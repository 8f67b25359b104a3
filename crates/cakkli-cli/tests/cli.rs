//! Integration tests for the `cakkli` binary.
//!
//! Every test runs inside a temp directory with an explicit `--config`
//! pointing into it, so a user's own configuration never leaks in.

use std::{fs, path::PathBuf};

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn cakkli(temp: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("cakkli");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CAKKLI_FRONTEND__RUNNER")
        .env_remove("CAKKLI_DEFAULTS__STYLE_LIBRARY")
        .env_remove("CAKKLI_DEFAULTS__PROJECT_NAME")
        .arg("--config")
        .arg(config_file(temp));
    cmd
}

fn config_file(temp: &TempDir) -> PathBuf {
    temp.path().join("cakkli.toml")
}

fn entries(dir: &std::path::Path) -> usize {
    fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cakkli"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_command_help() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--shadcn"))
        .stdout(predicate::str::contains("--mantine"))
        .stdout(predicate::str::contains("--dir"));
}

#[test]
fn no_color_env_accepts_any_value() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "true", "yes", "0", ""] {
        cakkli(&temp)
            .env("NO_COLOR", value)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cakkli.toml"));
    }
}

#[test]
fn no_color_flag_is_accepted() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .env_remove("NO_COLOR")
        .args(["--no-color", "config", "path"])
        .assert()
        .success();
}

// ── argument errors ───────────────────────────────────────────────────────────

#[test]
fn conflicting_styles_exit_two() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .args(["new", "demo", "--shadcn", "--mantine"])
        .assert()
        .code(2);
    assert!(!temp.path().join("demo").exists());
}

#[test]
fn invalid_project_name_exits_one_without_writing() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .args(["new", ".hidden", "--mantine", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));
    assert_eq!(entries(temp.path()), 0);
}

// ── generation failures ───────────────────────────────────────────────────────

#[test]
fn existing_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    cakkli(&temp)
        .args(["new", "demo", "--shadcn", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("different project name"));

    assert_eq!(entries(&root), 1);
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn missing_runner_fails_at_frontend_stage() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .env("CAKKLI_FRONTEND__RUNNER", "cakkli-test-no-such-runner")
        .args(["new", "demo", "--mantine", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("frontend scaffold failed"))
        .stderr(predicate::str::contains("cakkli-test-no-such-runner"));

    // No rollback: the empty root stays behind.
    let root = temp.path().join("demo");
    assert!(root.is_dir());
    assert_eq!(entries(&root), 0);
}

#[test]
fn dir_flag_selects_parent() {
    let temp = TempDir::new().unwrap();
    let parent = temp.path().join("sandbox");
    fs::create_dir(&parent).unwrap();

    cakkli(&temp)
        .env("CAKKLI_FRONTEND__RUNNER", "cakkli-test-no-such-runner")
        .args(["new", "demo", "--shadcn", "--yes", "--dir"])
        .arg(&parent)
        .assert()
        .code(1);

    assert!(parent.join("demo").is_dir());
    assert!(!temp.path().join("demo").exists());
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        config_file(&temp),
        "[defaults]\nstyle_library = \"mantine\"\n",
    )
    .unwrap();

    cakkli(&temp)
        .args(["config", "get", "defaults.style_library"])
        .assert()
        .success()
        .stdout("mantine\n");
}

#[test]
fn config_get_reads_environment() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .env("CAKKLI_FRONTEND__RUNNER", "pnpm")
        .args(["config", "get", "frontend.runner"])
        .assert()
        .success()
        .stdout("pnpm\n");
}

#[test]
fn config_get_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .args(["config", "get", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_path_reports_override() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cakkli.toml"));
}

#[test]
fn init_writes_defaults_once() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp).arg("init").assert().success();

    let written = fs::read_to_string(config_file(&temp)).unwrap();
    assert!(written.contains("project_name = \"my-fullstack-app\""));
    assert!(written.contains("runner = \"npm\""));

    fs::write(config_file(&temp), "# edited\n").unwrap();
    cakkli(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(config_file(&temp)).unwrap(), "# edited\n");

    cakkli(&temp).args(["init", "--force"]).assert().success();
    assert!(fs::read_to_string(config_file(&temp)).unwrap().contains("[defaults]"));
}

#[test]
fn malformed_config_exits_one() {
    let temp = TempDir::new().unwrap();
    fs::write(config_file(&temp), "[defaults\n").unwrap();
    cakkli(&temp)
        .args(["config", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn bash_completions() {
    let temp = TempDir::new().unwrap();
    cakkli(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cakkli"));
}
