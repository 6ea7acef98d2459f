use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const START: &str = "2099-06-01T09:00:00Z";
const END: &str = "2099-06-01T10:00:00Z";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn hz_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hz").expect("Failed to find hz binary");
    cmd.arg("--no-color");
    cmd
}

/// Creates a todo scheduled in the far future
fn create_future_todo(db_arg: &str, title: &str) {
    hz_cmd()
        .args([
            "--database-file",
            db_arg,
            "todo",
            "create",
            title,
            "--start",
            START,
            "--end",
            END,
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_create_todo_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    hz_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "todo",
            "create",
            "Write release notes",
            "--description",
            "Cover the new countdown view",
            "--start",
            START,
            "--end",
            END,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created todo with ID: 1"))
        .stdout(predicate::str::contains("Write release notes"))
        .stdout(predicate::str::contains("Cover the new countdown view"))
        .stdout(predicate::str::contains("Not Started"));
}

#[test]
fn test_cli_create_todo_without_times_starts_now() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    hz_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "todo",
            "create",
            "Focus block",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("In Progress"));
}

#[test]
fn test_cli_list_empty_todos() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    hz_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found."));
}

#[test]
fn test_cli_default_command_lists_todos() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    create_future_todo(db_arg, "Morning review");

    hz_cmd()
        .args(["--database-file", db_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. Morning review"));
}

#[test]
fn test_cli_malformed_start_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    hz_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "todo",
            "create",
            "Broken",
            "--start",
            "next tuesday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("startAt"));
}

#[test]
fn test_cli_show_update_and_delete_todo() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    create_future_todo(db_arg, "Draft proposal");

    hz_cmd()
        .args(["--database-file", db_arg, "todo", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Draft proposal"));

    hz_cmd()
        .args([
            "--database-file",
            db_arg,
            "todo",
            "update",
            "1",
            "--title",
            "Final proposal",
            "--status",
            "completed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated todo with ID: 1"))
        .stdout(predicate::str::contains("Renamed to 'Final proposal'"))
        .stdout(predicate::str::contains("Completed"));

    hz_cmd()
        .args(["--database-file", db_arg, "todo", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted todo 'Final proposal'"));

    hz_cmd()
        .args(["--database-file", db_arg, "todo", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Todo with ID 1 not found"));
}

#[test]
fn test_cli_countdown_of_future_todo() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    create_future_todo(db_arg, "Launch");

    hz_cmd()
        .args(["--database-file", db_arg, "todo", "countdown", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPCOMING"));

    hz_cmd()
        .args([
            "--database-file",
            db_arg,
            "todo",
            "countdown",
            "1",
            "--at",
            "2099-06-01T09:30:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACTIVE"));
}

#[test]
fn test_cli_lists_and_wheel() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    hz_cmd()
        .args(["--database-file", db_arg, "list", "create", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created list with ID: 1"));

    hz_cmd()
        .args(["--database-file", db_arg, "list", "spin", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no candidates"));

    hz_cmd()
        .args([
            "--database-file",
            db_arg,
            "list",
            "add",
            "1",
            "Ramen",
            "--weight",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ramen"));

    hz_cmd()
        .args(["--database-file", db_arg, "list", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));

    hz_cmd()
        .args(["--database-file", db_arg, "list", "spin", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The wheel picked **Ramen**"))
        .stdout(predicate::str::contains("Chance: 100.0%"));
}

#[test]
fn test_cli_user_scoping() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    create_future_todo(db_arg, "Private task");

    hz_cmd()
        .args(["--database-file", db_arg, "--user", "other", "todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found."));

    hz_cmd()
        .args(["--database-file", db_arg, "--user", "other", "todo", "delete", "1"])
        .assert()
        .failure();

    hz_cmd()
        .args(["--database-file", db_arg, "todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Private task"));
}

#[test]
fn test_cli_watch_runs_fixed_ticks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    create_future_todo(db_arg, "Standup");

    hz_cmd()
        .args([
            "--database-file",
            db_arg,
            "todo",
            "watch",
            "--ticks",
            "2",
            "--interval-ms",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Standup: UPCOMING"));
}
