//! Integration tests for the `resetdex` CLI binary.
//!
//! These run against the built-in catalog (or temp files) with the user's
//! configuration and environment masked out.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `resetdex` binary with env isolation.
///
/// Clears `RESETDEX_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn resetdex_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("resetdex");
    cmd.env("HOME", "/tmp/resetdex-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/resetdex-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("RESETDEX_CATALOG")
        .env_remove("RESETDEX_OUTPUT")
        .env_remove("RESETDEX_DEFAULTS__OUTPUT")
        .env_remove("RESETDEX_DEFAULTS__COLOR")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn stdout_json(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = resetdex_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    resetdex_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("factory-reset")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("show"))
            .and(predicate::str::contains("validate")),
    );
}

#[test]
fn test_version_flag() {
    resetdex_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("resetdex"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    resetdex_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    resetdex_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── list ────────────────────────────────────────────────────────────

#[test]
fn test_list_unfiltered_starts_with_first_device() {
    let output = resetdex_cmd().args(["list", "-o", "plain"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("rt-ac1200"));
    assert!(stdout.lines().count() > 30);
}

#[test]
fn test_list_query_narrows_to_one_device() {
    resetdex_cmd()
        .args(["list", "--query", "rt-ac", "-o", "plain"])
        .assert()
        .success()
        .stdout("rt-ac1200\n");
}

#[test]
fn test_list_query_is_case_insensitive() {
    let upper = stdout_json(resetdex_cmd().args(["list", "-Q", "ROTEADOR", "-o", "json"]));
    let lower = stdout_json(resetdex_cmd().args(["list", "-Q", "roteador", "-o", "json"]));
    assert_eq!(upper, lower);
    assert_eq!(upper.as_array().unwrap().len(), 5);
}

#[test]
fn test_list_no_match_prints_notice() {
    resetdex_cmd()
        .args(["list", "--category", "Roteadores", "--connectivity", "poe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results"));
}

#[test]
fn test_list_no_match_json_is_empty_array() {
    let value = stdout_json(resetdex_cmd().args(["list", "-Q", "zzz-nothing", "-o", "json"]));
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn test_list_table_has_card_columns() {
    resetdex_cmd()
        .args(["list", "--reset", "magnetico"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Category")
                .and(predicate::str::contains("Connectivity"))
                .and(predicate::str::contains("ss-320")),
        );
}

#[test]
fn test_list_every_result_carries_the_tag() {
    let value = stdout_json(resetdex_cmd().args(["list", "--connectivity", "poe", "-o", "json"]));
    let devices = value.as_array().unwrap();
    assert!(!devices.is_empty());
    for device in devices {
        let tags = device["connectivity"].as_array().unwrap();
        assert!(tags.iter().any(|t| t == "poe"), "{device}");
    }
}

// ── show ────────────────────────────────────────────────────────────

#[test]
fn test_show_prints_numbered_steps() {
    resetdex_cmd()
        .args(["show", "rt-ac1200"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("RT-AC1200")
                .and(predicate::str::contains("Reset físico (botão)"))
                .and(predicate::str::contains("Reset via interface"))
                .and(predicate::str::contains("   1. "))
                .and(predicate::str::contains("Notes")),
        );
}

#[test]
fn test_show_plain_is_unstyled_detail() {
    resetdex_cmd()
        .args(["show", "rt-ac1200", "-o", "plain", "--color", "always"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("RT-AC1200")
                .and(predicate::str::contains("   1. "))
                .and(predicate::str::contains("[1]"))
                .and(predicate::str::contains("\u{1b}[").not()),
        );
}

#[test]
fn test_show_json_sections() {
    let value = stdout_json(resetdex_cmd().args(["show", "rt-ac1200", "-o", "json"]));
    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["steps"][0]["number"], 1);
    assert_eq!(value["references"].as_array().unwrap().len(), 1);
}

#[test]
fn test_show_unknown_id_exits_not_found() {
    let output = resetdex_cmd().args(["show", "no-such-device"]).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("no-such-device"));
}

// ── facets ──────────────────────────────────────────────────────────

#[test]
fn test_categories_plain() {
    resetdex_cmd()
        .args(["categories", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roteadores"));
}

#[test]
fn test_tags_json_includes_both_kinds() {
    let value = stdout_json(resetdex_cmd().args(["tags", "-o", "json"]));
    let kinds: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap().to_owned())
        .collect();
    assert!(kinds.iter().any(|k| k == "reset_method"));
    assert!(kinds.iter().any(|k| k == "connectivity"));
}

// ── catalog sources ─────────────────────────────────────────────────

#[test]
fn test_custom_catalog_flag() {
    let file = catalog_file(
        "[[devices]]\nid = \"lab-1\"\nmodel = \"Lab Switch\"\ncategory = \"Switches\"\n",
    );
    resetdex_cmd()
        .arg("--catalog")
        .arg(file.path())
        .args(["list", "-o", "plain"])
        .assert()
        .success()
        .stdout("lab-1\n");
}

#[test]
fn test_missing_catalog_fails() {
    resetdex_cmd()
        .args(["--catalog", "/nonexistent/resetdex.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog"));
}

#[test]
fn test_validate_builtin() {
    resetdex_cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in"));
}

#[test]
fn test_validate_reports_duplicates() {
    let file = catalog_file("[[devices]]\nid = \"a\"\n\n[[devices]]\nid = \"a\"\n");
    let output = resetdex_cmd()
        .arg("validate")
        .arg(file.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("duplicate"));
    let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(text.contains(&name), "{text}");
}

#[test]
fn test_validate_warns_on_sparse_entries() {
    let file = catalog_file("[[devices]]\nid = \"bare\"\n");
    resetdex_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: bare"));
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path() {
    resetdex_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_no_config() {
    // Missing file falls back to defaults.
    resetdex_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = resetdex_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = resetdex_cmd()
        .args(["--output", "invalid", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}
