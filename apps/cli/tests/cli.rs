use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// The binary under test, with no inherited log filter or `MDEV__*` overrides.
fn mdev() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mdev"));
    cmd.env_remove("RUST_LOG");
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().to_ascii_uppercase().starts_with("MDEV__") {
            cmd.env_remove(key);
        }
    }
    cmd
}

#[test]
fn list_one_vocabulary() {
    mdev().args(["list", "platform"]).assert().success().stdout("android\nios\n");
}

#[test]
fn list_all_vocabularies() {
    mdev()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("lint_source: detekt, android-lint, ktlint\n"))
        .stdout(predicate::str::contains("kmm_module: shared, commonMain, commonTest"));
}

#[test]
fn check_member() {
    mdev().args(["check", "log_level", "fatal"]).assert().success().stdout("true\n");
}

#[test]
fn check_rejects_case_variants_and_foreign_tags() {
    mdev().args(["check", "platform", "Android"]).assert().code(1).stdout("false\n");
    mdev().args(["check", "platform", "booted"]).assert().code(1).stdout("false\n");
    mdev().args(["check", "log_level", ""]).assert().code(1).stdout("false\n");
}

#[test]
fn check_rejects_unknown_vocabulary() {
    mdev().args(["check", "colour", "red"]).assert().failure().code(2);
}

#[test]
fn classify_known_names() {
    mdev()
        .args(["classify", "--platform", "android", "android.widget.Button"])
        .assert()
        .success()
        .stdout("button\n");
    mdev()
        .args(["classify", "-p", "ios", "XCUIElementTypeSwitch"])
        .assert()
        .success()
        .stdout("switch\n");
}

#[test]
fn classify_unmapped_requires_fallback() {
    mdev()
        .args(["classify", "--platform", "android", "com.example.CustomView"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("com.example.CustomView"));

    mdev()
        .args(["classify", "--platform", "ios", "XCUIElementTypeUnknownFuture", "--fallback", "other"])
        .assert()
        .success()
        .stdout("other\n");
}

#[test]
fn defaults_prints_builtin_values() {
    let output = mdev().arg("defaults").output().expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["build_timeout_ms"], 1_800_000);
    assert_eq!(value["shell_timeout_ms"], 30_000);
    assert_eq!(value["log_limit"], 100);
    assert_eq!(value["screenshot_quality"], 50);
    assert_eq!(value["device_boot_timeout_ms"], 120_000);
}

#[test]
fn defaults_layers_file_and_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("mdev.toml");
    fs::write(&path, "shell_timeout_ms = 5000\nlog_limit = 20\n")?;

    let output = mdev()
        .arg("defaults")
        .arg("--config")
        .arg(&path)
        .env("MDEV__LOG_LIMIT", "40")
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["shell_timeout_ms"], 5000);
    assert_eq!(value["log_limit"], 40);
    assert_eq!(value["screenshot_quality"], 50);
    Ok(())
}

#[test]
fn defaults_rejects_invalid_values() {
    mdev()
        .arg("defaults")
        .env("MDEV__SCREENSHOT_QUALITY", "0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("screenshot_quality"));
}
