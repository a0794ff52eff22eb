// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lightcone(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lightcone").expect("binary built");
    cmd.env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config.path());
    cmd
}

#[test]
fn run_reports_contracted_rod_as_json() {
    let config = tempfile::tempdir().expect("tempdir");
    let output = lightcone(&config)
        .args(["run", "--beta", "0.6", "--angle", "0", "--length", "10", "--frames", "3", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row["frame"].as_u64(), Some(i as u64));
        let measured = row["contraction"]["measured"].as_f64().expect("measured");
        assert!((measured - 8.0).abs() < 1e-3, "measured {measured}");
    }
}

#[test]
fn run_table_shows_speed_readout() {
    let config = tempfile::tempdir().expect("tempdir");
    lightcone(&config)
        .args(["run", "--beta", "0.6", "--frames", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gamma = 1.2500"))
        .stdout(predicate::str::contains("measured"))
        .stdout(predicate::str::contains("8.0000"));
}

#[test]
fn run_rejects_negative_beta() {
    let config = tempfile::tempdir().expect("tempdir");
    lightcone(&config)
        .args(["run", "--beta", "-0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("beta must be finite and non-negative"));
}

#[test]
fn strict_sweep_passes_default_grid() {
    let config = tempfile::tempdir().expect("tempdir");
    lightcone(&config)
        .args(["sweep", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expected"))
        .stdout(predicate::str::contains("NO").not());
}

#[test]
fn sweep_json_has_one_row_per_cell() {
    let config = tempfile::tempdir().expect("tempdir");
    let output = lightcone(&config)
        .args(["sweep", "--betas", "0.2,0.8", "--angles", "0,45,90", "--json"])
        .output()
        .expect("sweep");
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r["within_tolerance"] == serde_json::Value::Bool(true)));
}

#[test]
fn prefs_round_trip_through_config_dir() {
    let config = tempfile::tempdir().expect("tempdir");
    lightcone(&config)
        .args(["prefs", "set-speed", "7.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved"));
    assert!(config.path().join("relativity.json").exists());
    lightcone(&config)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reference_speed\": 7.5"));
    lightcone(&config).args(["prefs", "reset"]).assert().success();
    lightcone(&config)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reference_speed\": 5.0"));
}

#[test]
fn invalid_prefs_are_not_saved() {
    let config = tempfile::tempdir().expect("tempdir");
    lightcone(&config)
        .args(["prefs", "set-max-beta", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to save invalid preferences"));
    assert!(!config.path().join("relativity.json").exists());
}

#[test]
fn custom_markers_missing_from_rod_scene_fail_run() {
    let config = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        config.path().join("relativity.json"),
        r#"{ "validator": { "markers": ["left", "right"] } }"#,
    )
    .expect("write prefs");
    lightcone(&config)
        .args(["run", "--frames", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not usable in the rod scene"));
}
