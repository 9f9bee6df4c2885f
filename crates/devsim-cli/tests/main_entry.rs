//! Integration tests for the device-manager binaries.
//!
//! Runs each binary as a subprocess from an empty working directory so that
//! no project configuration file is discovered, then checks the envelope on
//! stdout and the exit code.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const MISSING_COMMAND: &str = "{\"status\":\"error\",\"message\":\"No command provided\"}\n";

fn isolated(mut command: Command, workdir: &Path) -> Command {
    command
        .current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir)
        .env_remove("DEVSIM_CONFIG_PATH")
        .env_remove("DEVSIM_LOG_FILTER")
        .env_remove("DEVSIM_LOG_FORMAT")
        .env_remove("DEVSIM_OUTPUT_FORMAT")
        .env_remove("DEVSIM_EXIT_POLICY");
    command
}

fn workdir() -> anyhow::Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

#[test]
fn audio_manager_without_verb_exits_with_failure() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("audio_manager"), dir.path())
        .assert()
        .code(1)
        .stdout(MISSING_COMMAND);
    Ok(())
}

#[test]
fn bluetooth_manager_without_verb_exits_with_failure() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("bluetooth_manager"), dir.path())
        .assert()
        .code(1)
        .stdout(MISSING_COMMAND);
    Ok(())
}

#[test]
fn usb_manager_without_verb_exits_with_failure() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("usb_manager"), dir.path())
        .assert()
        .code(1)
        .stdout(MISSING_COMMAND);
    Ok(())
}

#[test]
fn unknown_verb_is_reported_with_success_exit() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("bluetooth_manager"), dir.path())
        .arg("Scan")
        .assert()
        .success()
        .stdout("{\"status\":\"error\",\"message\":\"Unknown command: scan\"}\n");
    Ok(())
}

#[test]
fn set_volume_reports_new_level() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("audio_manager"), dir.path())
        .args(["set_volume", "USB Audio Device", "50"])
        .assert()
        .success()
        .stdout(
            "{\"status\":\"success\",\"message\":\"Volume for USB Audio Device set to 50%\"}\n",
        );
    Ok(())
}

#[test]
fn usb_list_emits_a_single_json_document() -> anyhow::Result<()> {
    let dir = workdir()?;
    let output = isolated(cargo_bin_cmd!("usb_manager"), dir.path())
        .arg("list")
        .output()?;
    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(document["status"], "success");
    assert_eq!(document["devices"].as_array().map(Vec::len), Some(4));
    Ok(())
}

#[test]
fn strict_policy_flag_fails_unknown_verbs() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("usb_manager"), dir.path())
        .args(["--exit-policy", "strict", "format"])
        .assert()
        .code(1)
        .stdout(contains("Unknown command: format"));
    Ok(())
}

#[test]
fn strict_policy_from_environment() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("audio_manager"), dir.path())
        .env("DEVSIM_EXIT_POLICY", "strict")
        .args(["set_volume", "Microphone Array", "quiet"])
        .assert()
        .code(1)
        .stdout("{\"status\":\"error\",\"message\":\"Invalid volume level\"}\n");
    Ok(())
}

#[test]
fn human_output_renders_a_table() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("bluetooth_manager"), dir.path())
        .args(["--output-format", "human", "list"])
        .assert()
        .success()
        .stdout(
            contains("name")
                .and(contains("Wireless Keyboard"))
                .and(contains("AA:BB:CC:DD:EE:FF")),
        );
    Ok(())
}

#[test]
fn configuration_file_selects_exit_policy() -> anyhow::Result<()> {
    let dir = workdir()?;
    let path = dir.path().join("managers.toml");
    fs::write(&path, "exit_policy = \"strict\"\n")?;
    isolated(cargo_bin_cmd!("audio_manager"), dir.path())
        .arg("--config-path")
        .arg(&path)
        .arg("reboot")
        .assert()
        .code(1)
        .stdout(contains("Unknown command: reboot"));
    Ok(())
}

#[test]
fn malformed_flag_value_is_reported_on_stderr() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("usb_manager"), dir.path())
        .args(["--exit-policy", "sometimes", "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("failed to load configuration"));
    Ok(())
}

#[test]
fn debug_logging_goes_to_stderr() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("usb_manager"), dir.path())
        .args(["--log-filter", "debug", "info"])
        .assert()
        .success()
        .stdout(contains("\"driver_version\":\"10.0.19041.1\""))
        .stderr(contains("configuration resolved"));
    Ok(())
}

#[test]
fn audio_manager_is_silent_on_stderr_by_default() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("audio_manager"), dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
    isolated(cargo_bin_cmd!("audio_manager"), dir.path())
        .arg("reboot")
        .assert()
        .success()
        .stdout(contains("Unknown command: reboot"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn bluetooth_manager_is_silent_on_stderr_by_default() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("bluetooth_manager"), dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
    isolated(cargo_bin_cmd!("bluetooth_manager"), dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(contains("Unknown command: scan"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn usb_manager_is_silent_on_stderr_by_default() -> anyhow::Result<()> {
    let dir = workdir()?;
    isolated(cargo_bin_cmd!("usb_manager"), dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
    isolated(cargo_bin_cmd!("usb_manager"), dir.path())
        .arg("format")
        .assert()
        .success()
        .stdout(contains("Unknown command: format"))
        .stderr(predicate::str::is_empty());
    Ok(())
}
