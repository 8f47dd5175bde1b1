use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn workers_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("workers").unwrap();
    cmd.arg("--db").arg(dir.path().join("workers.db"));
    cmd
}

#[test]
fn display_on_an_empty_database_prints_only_the_empty_message() {
    let dir = TempDir::new().unwrap();

    workers_cmd(&dir)
        .arg("display")
        .assert()
        .success()
        .stdout("The worker list is empty.\n");
}

#[test]
fn added_workers_show_up_in_the_table() {
    let dir = TempDir::new().unwrap();

    workers_cmd(&dir)
        .args(["add", "--name", "Alice", "--post", "engineer", "--year", "2010"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Worker Alice added."));

    workers_cmd(&dir)
        .arg("display")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("engineer"))
        .stdout(predicate::str::contains("+----+"));
}

#[test]
fn select_with_a_huge_period_matches_nobody() {
    let dir = TempDir::new().unwrap();

    workers_cmd(&dir)
        .args(["add", "--name", "Bob", "--post", "manager", "--year", "2020"])
        .assert()
        .success();

    workers_cmd(&dir)
        .args(["select", "--period", "1000"])
        .assert()
        .success()
        .stdout("The worker list is empty.\n");
}

#[test]
fn missing_subcommand_prints_usage() {
    let dir = TempDir::new().unwrap();

    workers_cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
