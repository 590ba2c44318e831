use std::fs;
use std::path::Path;

use assert_cmd::{assert::Assert, Command};
use once_cell::sync::Lazy;
use predicates::prelude::*;
use serde_json::{json, Value};

static PHONE_NUMBER: Lazy<Value> = Lazy::new(|| json!({"Number": "+1-555-0100", "Type": "WORK"}));

static FUTURE_PROVIDER: Lazy<Value> = Lazy::new(|| {
    json!({
        "Name": "Hologram",
        "Type": "HOLOGRAM_MEET",
        "MeetingSetting": {"RequirePin": "YES"}
    })
});

fn render_cmd(work_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("a4b").unwrap();
    cmd.current_dir(work_dir)
        .env_remove("LOG_LEVEL")
        .env_remove("A4B_ENV_FILE")
        .arg("render");
    cmd
}

fn render_file_assert(work_dir: &Path, shape: &str, payload: &Value) -> Assert {
    let path = work_dir.join("payload.json");
    fs::write(&path, payload.to_string()).unwrap();
    render_cmd(work_dir).arg(shape).arg(&path).assert()
}

#[test]
fn render_from_file() {
    let tempdir = tempfile::tempdir().unwrap();

    render_file_assert(tempdir.path(), "PhoneNumber", &PHONE_NUMBER)
        .success()
        .stdout("{Number: +1-555-0100, Type: WORK}\n");
}

#[test]
fn render_from_stdin() {
    let tempdir = tempfile::tempdir().unwrap();

    render_cmd(tempdir.path())
        .arg("ConferenceProvider")
        .write_stdin(FUTURE_PROVIDER.to_string())
        .assert()
        .success()
        .stdout("{Name: Hologram, Type: HOLOGRAM_MEET, MeetingSetting: {RequirePin: YES}}\n")
        .stderr("");
}

#[test]
fn render_unknown_shape_fails() {
    let tempdir = tempfile::tempdir().unwrap();

    render_file_assert(tempdir.path(), "Widget", &PHONE_NUMBER)
        .failure()
        .stderr(predicate::str::contains("Error: unknown shape 'Widget'"));
}

#[test]
fn render_malformed_payload_fails() {
    let tempdir = tempfile::tempdir().unwrap();

    render_cmd(tempdir.path())
        .arg("PhoneNumber")
        .write_stdin("{\"Number\": ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse shape JSON"));
}

#[test]
fn render_missing_file_fails() {
    let tempdir = tempfile::tempdir().unwrap();

    render_cmd(tempdir.path())
        .arg("PhoneNumber")
        .arg(tempdir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read"));
}

#[test]
fn log_level_from_env_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let env_file = tempdir.path().join("a4b.env");
    fs::write(&env_file, "LOG_LEVEL=debug\n").unwrap();

    render_cmd(tempdir.path())
        .env("A4B_ENV_FILE", &env_file)
        .arg("ConferenceProvider")
        .write_stdin(FUTURE_PROVIDER.to_string())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "keeping unrecognized ConferenceProviderType token 'HOLOGRAM_MEET'",
        ));
}
