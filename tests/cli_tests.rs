//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via the
//! `LEDGERLY_DATA_DIR` override.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "ledgerly";

fn ledgerly(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("LEDGERLY_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn help_prints_overview() {
    let dir = TempDir::new().unwrap();
    ledgerly(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("tracks expenses and income"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    ledgerly(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Data directory"))
        .stdout(contains(dir.path().to_str().unwrap()));
}

#[test]
fn add_transaction_then_list_shows_it() {
    let dir = TempDir::new().unwrap();

    ledgerly(&dir)
        .args([
            "transaction",
            "add",
            "-20.00",
            "Food",
            "--date",
            "2024-05-03",
            "--description",
            "groceries",
        ])
        .assert()
        .success()
        .stdout(contains("Added transaction"));

    ledgerly(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("Food"))
        .stdout(contains("groceries"))
        .stdout(contains("2024-05-03"));
}

#[test]
fn invalid_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    ledgerly(&dir)
        .args(["transaction", "add", "-20.00", "Groceries"])
        .assert()
        .failure()
        .stderr(contains("Unknown category"));
}

#[test]
fn zero_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    ledgerly(&dir)
        .args(["transaction", "add", "0", "Food"])
        .assert()
        .failure()
        .stderr(contains("non-zero"));
}

#[test]
fn duplicate_budget_is_rejected() {
    let dir = TempDir::new().unwrap();

    ledgerly(&dir)
        .args(["budget", "add", "Food", "100", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("Added budget"));

    ledgerly(&dir)
        .args(["budget", "add", "Food", "200", "--month", "2024-05"])
        .assert()
        .failure()
        .stderr(contains("Budget already exists: Food 2024-05"));
}

#[test]
fn exceeding_a_budget_prints_an_alert() {
    let dir = TempDir::new().unwrap();

    ledgerly(&dir)
        .args(["budget", "add", "Food", "10", "--month", "2024-05"])
        .assert()
        .success();

    ledgerly(&dir)
        .args([
            "transaction",
            "add",
            "-15.00",
            "Food",
            "--date",
            "2024-05-03",
        ])
        .assert()
        .success()
        .stdout(contains(
            "Alert: You have exceeded your Food budget for this month!",
        ));
}

#[test]
fn spending_report_includes_zero_activity_categories() {
    let dir = TempDir::new().unwrap();

    ledgerly(&dir)
        .args([
            "transaction",
            "add",
            "-20.00",
            "Food",
            "--date",
            "2024-05-03",
        ])
        .assert()
        .success();

    ledgerly(&dir)
        .args(["report", "spending", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("Food"))
        .stdout(contains("Entertainment"))
        .stdout(contains("Goal Contribution"))
        .stdout(contains("Total spent"));
}

#[test]
fn goal_contribution_flow() {
    let dir = TempDir::new().unwrap();

    let output = ledgerly(&dir)
        .args(["goal", "add", "Vacation", "1000", "2024-12-31"])
        .assert()
        .success()
        .stdout(contains("Added goal"))
        .get_output()
        .stdout
        .clone();

    // "Added goal goal_xxxxxxxx: Vacation (target $1000.00 by 2024-12-31)"
    let stdout = String::from_utf8(output).unwrap();
    let goal_id = stdout
        .split_whitespace()
        .nth(2)
        .unwrap()
        .trim_end_matches(':')
        .to_string();

    ledgerly(&dir)
        .args([
            "goal",
            "contribute",
            &goal_id,
            "-250.00",
            "--date",
            "2024-05-01",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded contribution"));

    ledgerly(&dir)
        .args(["report", "goals"])
        .assert()
        .success()
        .stdout(contains("Vacation"))
        .stdout(contains("25%"));
}

#[test]
fn data_persists_between_invocations() {
    let dir = TempDir::new().unwrap();

    ledgerly(&dir)
        .args([
            "transaction",
            "add",
            "-20.00",
            "Food",
            "--date",
            "2024-05-03",
        ])
        .assert()
        .success();

    assert!(dir.path().join("data").join("transactions.json").exists());

    ledgerly(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("Food"));
}
