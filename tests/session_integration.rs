use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn duke(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("duke").unwrap();
    cmd.arg("--plain")
        .arg("--data-dir")
        .arg(data_dir)
        .env_remove("DUKE_DEBUG");
    cmd
}

#[test]
fn test_tasks_survive_restart() {
    let temp_dir = tempfile::tempdir().unwrap();

    duke(temp_dir.path())
        .write_stdin("todo buy milk\ndeadline submit report /by 02/12/2024\ndone 1\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added: [T][ ] buy milk"))
        .stdout(predicate::str::contains("Saved 2 tasks to"))
        .stdout(predicate::str::contains("Bye! Hope to see you again soon!"));

    assert!(temp_dir.path().join("tasks.json").exists());

    duke(temp_dir.path())
        .write_stdin("list\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [T][X] buy milk"))
        .stdout(predicate::str::contains(
            "2. [D][ ] submit report (by: Dec 02 2024)",
        ))
        .stdout(predicate::str::contains("Active Tasks: 1"))
        .stdout(predicate::str::contains("Completed Tasks: 1"));
}

#[test]
fn test_end_of_input_still_saves() {
    let temp_dir = tempfile::tempdir().unwrap();

    duke(temp_dir.path())
        .write_stdin("event party /at 31/12/2024\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 task to"))
        .stdout(predicate::str::contains("Bye!").not());

    let saved = fs::read_to_string(temp_dir.path().join("tasks.json")).unwrap();
    assert!(saved.contains("\"kind\": \"event\""));
    assert!(saved.contains("2024-12-31"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    duke(temp_dir.path())
        .write_stdin("blah\ndeadline x /by 2024-12-02\ndone one\ntodo still here\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry, I did not understand: blah"))
        .stdout(predicate::str::contains(
            "Please write your date in the format \"dd/MM/yyyy\"",
        ))
        .stdout(predicate::str::contains("Please provide a task number"))
        .stdout(predicate::str::contains("added: [T][ ] still here"));
}

#[test]
fn test_lines_after_bye_are_not_read() {
    let temp_dir = tempfile::tempdir().unwrap();

    duke(temp_dir.path())
        .write_stdin("bye\ntodo never\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("never").not());
}

#[test]
fn test_corrupt_task_file_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("tasks.json"), "not json at all").unwrap();

    duke(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("starting with an empty list"))
        .stdout(predicate::str::contains("There are currently no tasks."));

    let backup = fs::read_to_string(temp_dir.path().join("tasks.json.bak")).unwrap();
    assert_eq!(backup, "not json at all");
}

#[test]
fn test_unparseable_file_is_kept_after_bye() {
    let temp_dir = tempfile::tempdir().unwrap();
    let original = r#"[{"kind": "todo", "description": "rent"},]"#;
    fs::write(temp_dir.path().join("tasks.json"), original).unwrap();

    duke(temp_dir.path())
        .write_stdin("todo new one\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("moved to"))
        .stdout(predicate::str::contains("tasks.json.bak"))
        .stdout(predicate::str::contains("Saved 1 task to"));

    let backup = fs::read_to_string(temp_dir.path().join("tasks.json.bak")).unwrap();
    assert_eq!(backup, original);
    let saved = fs::read_to_string(temp_dir.path().join("tasks.json")).unwrap();
    assert!(saved.contains("new one"));
}

#[test]
fn test_skipped_records_are_named_and_kept() {
    let temp_dir = tempfile::tempdir().unwrap();
    let original = r#"[
        {"kind": "todo", "description": "kept"},
        {"kind": "deadline", "description": "rent", "when": "02/12/2024"}
    ]"#;
    fs::write(temp_dir.path().join("tasks.json"), original).unwrap();

    duke(temp_dir.path())
        .write_stdin("list\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped stored task 2 (\"rent\")"))
        .stdout(predicate::str::contains("1. [T][ ] kept"))
        .stdout(predicate::str::contains("Saved 1 task to"));

    let backup = fs::read_to_string(temp_dir.path().join("tasks.json.bak")).unwrap();
    assert_eq!(backup, original);
}

#[test]
fn test_clean_load_leaves_no_backup() {
    let temp_dir = tempfile::tempdir().unwrap();

    duke(temp_dir.path())
        .write_stdin("todo a\nbye\n")
        .assert()
        .success();
    duke(temp_dir.path())
        .write_stdin("list\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped").not())
        .stdout(predicate::str::contains("moved to").not());

    assert!(!temp_dir.path().join("tasks.json.bak").exists());
}

#[test]
fn test_config_picks_data_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"data_file": "work.json", "line_width": 10}"#,
    )
    .unwrap();

    duke(temp_dir.path())
        .write_stdin("todo ship it\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("__________\n"));

    assert!(temp_dir.path().join("work.json").exists());
    assert!(!temp_dir.path().join("tasks.json").exists());
}

#[test]
fn test_duke_home_env() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("duke").unwrap();
    cmd.arg("--plain")
        .env("DUKE_HOME", temp_dir.path())
        .write_stdin("todo from env\nbye\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("tasks.json").exists());
}

#[test]
fn test_crlf_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    duke(temp_dir.path())
        .write_stdin("hello\r\nbye\r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi! I'm Duke! Pleasure to meet you :)"))
        .stdout(predicate::str::contains("Bye! Hope to see you again soon!"));
}
