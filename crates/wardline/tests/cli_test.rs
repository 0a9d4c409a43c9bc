//! Integration tests for the `wardline` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and full site-scoped workflows against a temporary store snapshot --
//! never the user's real data file.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `wardline` binary with env isolation.
///
/// Clears all `WARDLINE_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn wardline_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("wardline");
    cmd.env("HOME", "/tmp/wardline-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/wardline-cli-test-nonexistent")
        .env("XDG_DATA_HOME", "/tmp/wardline-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("WARDLINE_DATA_FILE")
        .env_remove("WARDLINE_SITE")
        .env_remove("WARDLINE_OUTPUT");
    cmd
}

/// Same, but bound to a specific store snapshot file.
fn wardline_with_store(data_file: &Path) -> assert_cmd::Command {
    let mut cmd = wardline_cmd();
    cmd.arg("--data-file").arg(data_file);
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = wardline_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    wardline_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("hospital")
            .and(predicate::str::contains("sites"))
            .and(predicate::str::contains("patients"))
            .and(predicate::str::contains("staff")),
    );
}

#[test]
fn test_version_flag() {
    wardline_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wardline"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    wardline_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    wardline_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Site registry ───────────────────────────────────────────────────

#[test]
fn test_sites_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "ngh", "Northgate General", "--beds", "120"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["sites", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NGH").and(predicate::str::contains("Northgate General")),
        );
}

#[test]
fn test_duplicate_site_code_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "NGH", "Northgate General"])
        .assert()
        .success();

    let output = wardline_with_store(&store)
        .args(["sites", "add", "ngh", "Northgate Clone"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(5), "conflict exit code");
}

// ── No-active-site affordance ───────────────────────────────────────

#[test]
fn test_data_commands_require_an_active_site() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    let output = wardline_with_store(&store)
        .args(["patients", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "no-active-site exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("No active site"),
        "Expected the no-active-site diagnostic:\n{text}"
    );
    assert!(
        text.contains("sites use"),
        "Expected actionable help:\n{text}"
    );
}

// ── Site-scoped workflows ───────────────────────────────────────────

#[test]
fn test_admit_list_and_discharge_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "NGH", "Northgate General", "--beds", "80"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["sites", "use", "NGH"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["patients", "admit", "Nora Bell", "--department", "Emergency"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["patients", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nora Bell").and(predicate::str::contains("PT-NGH-0001")),
        );

    wardline_with_store(&store)
        .args(["patients", "discharge", "PT-NGH-0001"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["patients", "list", "--status", "discharged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nora Bell"));

    // Both actions landed in the audit trail.
    wardline_with_store(&store)
        .args(["audit", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("patient-admitted")
                .and(predicate::str::contains("patient-discharged")),
        );
}

#[test]
fn test_patient_records_stay_isolated_between_sites() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "NGH", "Northgate General"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["sites", "add", "RVM", "Riverview Medical"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["sites", "use", "NGH"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["patients", "admit", "Nora Bell", "--department", "Emergency"])
        .assert()
        .success();

    // RVM sees an empty patient list, never NGH's record.
    wardline_with_store(&store)
        .args(["sites", "use", "RVM"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["patients", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nora Bell").not());

    // Switching back shows it again.
    wardline_with_store(&store)
        .args(["sites", "use", "NGH"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["patients", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nora Bell"));
}

#[test]
fn test_site_flag_overrides_the_persisted_selection() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "NGH", "Northgate General"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["sites", "add", "RVM", "Riverview Medical"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["sites", "use", "NGH"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["--site", "RVM", "sites", "current"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Riverview Medical"));
}

#[test]
fn test_remove_site_drops_its_data() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "NGH", "Northgate General"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["sites", "use", "NGH"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["patients", "admit", "Nora Bell", "--department", "Emergency"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["sites", "remove", "NGH", "--yes"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["sites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NGH").not());
}

// ── Seed and stats ──────────────────────────────────────────────────

#[test]
fn test_seed_then_stats() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store).arg("seed").assert().success();

    wardline_with_store(&store)
        .args(["sites", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NGH")
                .and(predicate::str::contains("RVM"))
                .and(predicate::str::contains("SLC")),
        );

    wardline_with_store(&store)
        .args(["--site", "NGH", "stats"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Site NGH").and(predicate::str::contains("Occupancy")),
        );

    wardline_with_store(&store)
        .args(["--site", "NGH", "compliance", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hand hygiene"));
}

// ── Structured output ───────────────────────────────────────────────

#[test]
fn test_json_output_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "NGH", "Northgate General"])
        .assert()
        .success();

    let output = wardline_with_store(&store)
        .args(["--output", "json", "sites", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(parsed[0]["code"], "NGH");
}

#[test]
fn test_plain_output_lists_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "NGH", "Northgate General"])
        .assert()
        .success();

    wardline_with_store(&store)
        .args(["--output", "plain", "sites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::diff("NGH\n"));
}

// ── Validation ──────────────────────────────────────────────────────

#[test]
fn test_invalid_status_filter_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    wardline_with_store(&store)
        .args(["sites", "add", "NGH", "Northgate General"])
        .assert()
        .success();
    wardline_with_store(&store)
        .args(["sites", "use", "NGH"])
        .assert()
        .success();

    let output = wardline_with_store(&store)
        .args(["patients", "list", "--status", "teleported"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "usage exit code");
}
