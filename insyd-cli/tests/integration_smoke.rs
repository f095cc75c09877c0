//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("insyd").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"))
        .stdout(predicate::str::contains("PORT"));
}

#[test]
fn test_init_help() {
    let mut cmd = Command::cargo_bin("insyd").unwrap();
    cmd.arg("init").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("without sample data"));
}

#[test]
fn test_init_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("data").join("insyd.db");

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("insyd").unwrap();
        cmd.arg("init").arg("--db-path").arg(&db);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("seeded: true"));
    }

    assert!(db.exists());
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("insyd").unwrap();
    cmd.arg("bogus");

    cmd.assert().failure();
}
