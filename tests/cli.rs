use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn meterbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("meterbook").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("METERBOOK_DATA_DIR");
    cmd
}

const SESSION_SCRIPT: &str = "\
1\njohn_doe\npassword\nUSER\n\
2\njohn_doe\npassword\n\
3\nHOT_WATER\n4\n100\n\
3\nHOT_WATER\n4\n200\n\
4\nHOT_WATER\n\
5\nHOT_WATER\n\
7\n";

#[test]
fn test_config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    meterbook(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("meterbook Configuration"))
        .stdout(predicate::str::contains("audit.log"))
        .stdout(predicate::str::contains("Audit log to file: true"))
        .stdout(predicate::str::contains("Initialized:    false"))
        .stdout(predicate::str::contains("Audit entries:     0"));
}

#[test]
fn test_init_writes_settings() {
    let temp_dir = TempDir::new().unwrap();

    meterbook(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized meterbook"));

    assert!(temp_dir.path().join("config.json").exists());

    meterbook(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"));
}

#[test]
fn test_interactive_session() {
    let temp_dir = TempDir::new().unwrap();

    meterbook(&temp_dir)
        .write_stdin(SESSION_SCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("User 'john_doe' registered as USER."))
        .stdout(predicate::str::contains("Logged in as 'john_doe'."))
        .stdout(predicate::str::contains(
            "Submitted HOT_WATER reading for APRIL: 100.",
        ))
        .stdout(predicate::str::contains("has already been submitted"))
        .stdout(predicate::str::contains("Latest HOT_WATER reading: 100"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_audit_log_persisted() {
    let temp_dir = TempDir::new().unwrap();

    meterbook(&temp_dir)
        .write_stdin(SESSION_SCRIPT)
        .assert()
        .success();

    meterbook(&temp_dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("REGISTER john_doe"))
        .stdout(predicate::str::contains("LOGIN john_doe"))
        .stdout(predicate::str::contains("SUBMIT john_doe - HOT_WATER for APRIL: 100"));

    meterbook(&temp_dir)
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUBMIT john_doe"))
        .stdout(predicate::str::contains("REGISTER").not());

    meterbook(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit entries:     3"));
}

#[test]
fn test_readings_do_not_survive_restart() {
    let temp_dir = TempDir::new().unwrap();

    meterbook(&temp_dir)
        .write_stdin(SESSION_SCRIPT)
        .assert()
        .success();

    meterbook(&temp_dir)
        .write_stdin("2\njohn_doe\npassword\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid credentials."));
}

#[test]
fn test_audit_disabled_keeps_log_in_memory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"audit": {"enabled": false, "echo": true}}"#,
    )
    .unwrap();

    meterbook(&temp_dir)
        .write_stdin("1\nalice\npw\nADMIN\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit: ["))
        .stdout(predicate::str::contains("REGISTER alice"));

    assert!(!temp_dir.path().join("audit.log").exists());
}

#[test]
fn test_unknown_choice_and_eof() {
    let temp_dir = TempDir::new().unwrap();

    meterbook(&temp_dir)
        .write_stdin("42\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown choice '42'."))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_empty_audit_log() {
    let temp_dir = TempDir::new().unwrap();

    meterbook(&temp_dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit log is empty."));
}
