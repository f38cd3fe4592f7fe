//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sms_credits(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sms-credits"));
    cmd.current_dir(dir.path()).env_remove("SMS_CREDITS_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sms-credits"));
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Count SMS segments"))
        .stdout(predicate::str::contains("count"))
        .stdout(predicate::str::contains("sanitize"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_count_from_argument() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir).args(["count", &"a".repeat(161)]).assert().success().stdout("2\n");
}

#[test]
fn test_count_from_stdin_strips_newline() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir)
        .arg("count")
        .write_stdin(format!("{}\n", "a".repeat(160)))
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_count_json() {
    let dir = TempDir::new().expect("tmp");
    let output = sms_credits(&dir)
        .args(["--format", "json", "count", "😊😊"])
        .output()
        .expect("run count");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["encoding"], "unicode");
    assert_eq!(value["total_chars"], 4);
    assert_eq!(value["segments"], 1);
    assert_eq!(value["chars_per_segment"], 70);
}

#[test]
fn test_sanitize_text() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir)
        .args(["sanitize", "“world” … • €1 – ©"])
        .assert()
        .success()
        .stdout("\"world\" ... * EUR1 - (c)\n");
}

#[test]
fn test_sanitize_rejects_invalid_utf8_stdin() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir)
        .arg("sanitize")
        .write_stdin(vec![0x66u8, 0xff, 0x6f])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_info_text_report() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir)
        .args(["info", "Hello, this is a test message with illegal characters: 😊, ©, ™, and €."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoding: unicode"))
        .stdout(predicate::str::contains("Segments: 2"))
        .stdout(predicate::str::contains("Total chars: 71"))
        .stdout(predicate::str::contains("Illegal characters: 😊"))
        .stdout(predicate::str::contains("Sanitized characters: ©, ™, €"));
}

#[test]
fn test_info_json_report() {
    let dir = TempDir::new().expect("tmp");
    let output = sms_credits(&dir)
        .args(["info", "--format", "json", "Price – €5"])
        .output()
        .expect("run info");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["encoding"], "unicode");
    assert_eq!(value["original"], "Price – €5");
    assert_eq!(value["sanitized_message"], "Price - EUR5");
    assert_eq!(value["sanitized_characters"], serde_json::json!(["–", "€"]));
    assert_eq!(value["illegal_characters"], serde_json::json!([]));
}

#[test]
fn test_discovered_config_adds_lookalikes_and_format() {
    let dir = TempDir::new().expect("tmp");
    fs::write(
        dir.path().join("sms-credits.toml"),
        "[output]\nformat = 'json'\n\n[[sanitize.lookalikes]]\nname = 'cent'\nlookalike = '¢'\nreplacement = 'c'\n",
    )
    .expect("write config");

    let output = sms_credits(&dir).args(["sanitize", "50¢"]).output().expect("run sanitize");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["sanitized_message"], "50c");
    assert_eq!(value["sanitized_characters"], serde_json::json!(["¢"]));
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = TempDir::new().expect("tmp");
    fs::write(dir.path().join("sms-credits.toml"), "[output]\nformat = 'json'\n")
        .expect("write config");

    sms_credits(&dir).args(["--format", "text", "count", "hi"]).assert().success().stdout("1\n");
}

#[test]
fn test_explicit_invalid_config_fails() {
    let dir = TempDir::new().expect("tmp");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[output]\nformat = 'xml'\n").expect("write config");

    sms_credits(&dir)
        .args(["--config", path.to_str().expect("utf8 path"), "count", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid TOML config"));
}

#[test]
fn test_unsafe_replacement_in_explicit_config_fails() {
    let dir = TempDir::new().expect("tmp");
    let path = dir.path().join("rules.toml");
    fs::write(&path, "[[sanitize.lookalikes]]\nlookalike = '¢'\nreplacement = '€'\n")
        .expect("write config");

    for command in ["count", "sanitize", "info"] {
        sms_credits(&dir)
            .args(["--config", path.to_str().expect("utf8 path"), command, "50¢"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("non GSM-7 character"));
    }
}

#[test]
fn test_unsafe_replacement_in_discovered_config_is_ignored() {
    let dir = TempDir::new().expect("tmp");
    fs::write(
        dir.path().join("sms-credits.toml"),
        "[output]\nformat = 'json'\n\n[[sanitize.lookalikes]]\nlookalike = '¢'\nreplacement = '€'\n",
    )
    .expect("write config");

    sms_credits(&dir).args(["count", "50¢"]).assert().success().stdout("1\n");
    sms_credits(&dir).args(["sanitize", "50¢ – ok"]).assert().success().stdout("50¢ - ok\n");
}

#[test]
fn test_dash_message_is_read_from_stdin() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir).args(["sanitize", "-"]).write_stdin("–").assert().success().stdout("-\n");
    sms_credits(&dir).arg("sanitize").write_stdin("-\n").assert().success().stdout("-\n");
}

#[test]
fn test_help_explains_dash_argument() {
    let dir = TempDir::new().expect("tmp");
    sms_credits(&dir)
        .args(["count", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pipe it through stdin"));
}
