//! Integration tests for the `fabula` CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a small test story.
fn test_story() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entry.story");
    fs::write(
        &path,
        "You wake up in an old house.\n\
         What is your name?\n\
         +INPUT: name\n\
         +CLEAR\n\
         Hello, $name!\n\
         +PAUSE\n\
         The story ends here.\n",
    )
    .unwrap();
    (dir, path)
}

fn fabula() -> Command {
    Command::cargo_bin("fabula").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_valid_story() {
    let (_dir, path) = test_story();
    fabula()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("parsed cleanly"))
        .stdout(predicate::str::contains("7 instructions"))
        .stdout(predicate::str::contains("1 input"));
}

#[test]
fn check_reports_unknown_directive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.story");
    fs::write(&path, "fine line\n+FOO\n").unwrap();

    fabula()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown directive"));
}

#[test]
fn check_reports_missing_input_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.story");
    fs::write(&path, "+INPUT:\n").unwrap();

    fabula()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a variable name"));
}

#[test]
fn check_warns_on_uncaptured_variable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typo.story");
    fs::write(&path, "+INPUT: name\nHello, $nmae!\n").unwrap();

    fabula()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 warning"))
        .stderr(predicate::str::contains("never captured"))
        .stderr(predicate::str::contains("nmae"));
}

#[test]
fn check_missing_file() {
    fabula()
        .arg("check")
        .arg("no/such/file.story")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_narrative_story_to_stdout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prose.story");
    fs::write(&path, "first line\nsecond line\n").unwrap();

    fabula()
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout("first line\nsecond line\n");
}

#[test]
fn run_interpolates_piped_input() {
    let (_dir, path) = test_story();
    fabula()
        .arg("run")
        .arg(&path)
        .write_stdin("Rin\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Rin!"))
        .stdout(predicate::str::contains("The story ends here."));
}

#[test]
fn run_prints_form_feed_for_clear_when_piped() {
    let (_dir, path) = test_story();
    fabula()
        .arg("run")
        .arg(&path)
        .write_stdin("Rin\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{c}"));
}

#[test]
fn run_survives_short_stdin() {
    // Input resolves to "" and the pause falls through at EOF
    let (_dir, path) = test_story();
    fabula()
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, !"));
}

#[test]
fn run_fails_on_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.story");
    fs::write(&path, "+BOGUS\n").unwrap();

    fabula().arg("run").arg(&path).assert().failure();
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_json_is_parseable() {
    let (_dir, path) = test_story();
    let output = fabula()
        .arg("export")
        .arg(&path)
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let instructions = value.as_array().unwrap();
    assert_eq!(instructions.len(), 7);
    assert_eq!(instructions[3], serde_json::json!("clear"));
}

#[test]
fn export_text_lists_source_form() {
    let (_dir, path) = test_story();
    fabula()
        .arg("export")
        .arg(&path)
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("+INPUT: name"))
        .stdout(predicate::str::contains("+PAUSE"))
        .stdout(predicate::str::contains("Hello, $name!"));
}

#[test]
fn export_to_file() {
    let (dir, path) = test_story();
    let out = dir.path().join("story.json");

    fabula()
        .arg("export")
        .arg(&path)
        .arg("json")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("input"));
}

#[test]
fn export_unknown_format() {
    let (_dir, path) = test_story();
    fabula()
        .arg("export")
        .arg(&path)
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
