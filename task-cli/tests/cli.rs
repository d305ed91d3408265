use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn task_cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("task-cli").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TASK_CLI_TASKS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_creates_tasks_file_in_working_directory() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    task_cli(&dir)
        .args(["add", "Buy milk"])
        .assert()
        .success()
        .stdout("Task added successfully (ID: 1)\n");

    dir.child("tasks.json")
        .assert(predicate::str::contains(r#""description": "Buy milk""#));
    Ok(())
}

#[test]
fn list_on_fresh_directory_reports_no_tasks() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    task_cli(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("No tasks found\n");

    dir.child("tasks.json").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn full_workflow() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    task_cli(&dir).args(["add", "Buy milk"]).assert().success();
    task_cli(&dir)
        .args(["add", "Write report"])
        .assert()
        .success()
        .stdout("Task added successfully (ID: 2)\n");
    task_cli(&dir)
        .args(["mark-in-progress", "2"])
        .assert()
        .success()
        .stdout("Task 2 marked as in-progress\n");
    task_cli(&dir)
        .args(["mark-done", "1"])
        .assert()
        .success()
        .stdout("Task 1 marked as done\n");
    task_cli(&dir)
        .args(["update", "1", "Buy oat milk"])
        .assert()
        .success()
        .stdout("Task 1 updated successfully\n");

    task_cli(&dir)
        .args(["list", "done"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Tasks (done):\n")
                .and(predicate::str::contains("Description: Buy oat milk"))
                .and(predicate::str::contains("Write report").not()),
        );

    task_cli(&dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout("Task 2 deleted successfully\n");
    task_cli(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Tasks:\n")
                .and(predicate::str::contains("ID: 1"))
                .and(predicate::str::contains("ID: 2").not()),
        );
    Ok(())
}

#[test]
fn unknown_id_prints_error_and_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    task_cli(&dir)
        .args(["delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Task not found with ID: 7"));
    Ok(())
}

#[test]
fn non_numeric_id_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    task_cli(&dir).args(["mark-done", "abc"]).assert().failure();
    Ok(())
}

#[test]
fn invalid_status_filter_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    task_cli(&dir).args(["list", "pending"]).assert().failure();
    Ok(())
}

#[test]
fn corrupted_file_is_reported() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    dir.child("tasks.json").write_str(
        r#"[{"id": 1, "description": "a", "status": "LATER", "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"}]"#,
    )?;

    task_cli(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown status 'LATER'"));
    Ok(())
}

#[test]
fn file_flag_overrides_default_location() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    task_cli(&dir)
        .args(["--file", "lists/home.json", "add", "Water plants"])
        .assert()
        .success();

    dir.child("lists/home.json").assert(predicate::path::exists());
    dir.child("tasks.json").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn config_file_sets_tasks_location() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    dir.child("task-cli.toml")
        .write_str("tasks_file = \"configured.json\"\n")?;

    task_cli(&dir).args(["add", "From config"]).assert().success();

    dir.child("configured.json")
        .assert(predicate::str::contains("From config"));
    Ok(())
}

#[test]
fn environment_sets_tasks_location() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    task_cli(&dir)
        .env("TASK_CLI_TASKS_FILE", "from-env.json")
        .args(["add", "From environment"])
        .assert()
        .success();

    dir.child("from-env.json")
        .assert(predicate::str::contains("From environment"));
    dir.child("tasks.json").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn add_after_highest_possible_id_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    dir.child("tasks.json").write_str(
        r#"[{"id": 4294967295, "description": "last", "status": "TODO", "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"}]"#,
    )?;

    task_cli(&dir)
        .args(["add", "one too many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: no task ids left to assign"));
    Ok(())
}
