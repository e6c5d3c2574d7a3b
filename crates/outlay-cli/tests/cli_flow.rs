//! End-to-end tests driving the `outlay` binary.
//!
//! Each test gets its own temp dir; OUTLAY_CONFIG and OUTLAY_LEDGER are
//! pointed inside it so nothing touches the user's real files.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_outlay"))
}

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: tempdir().expect("temp dir"),
        }
    }

    fn ledger_path(&self) -> PathBuf {
        self.dir.path().join("expenses.csv")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(bin())
            .args(args)
            .env("OUTLAY_CONFIG", self.dir.path().join("config.toml"))
            .env("OUTLAY_LEDGER", self.ledger_path())
            .output()
            .expect("binary should run")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf-8 stdout")
    }

    fn run_err(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(!output.status.success(), "command {:?} should fail", args);
        String::from_utf8(output.stderr).expect("utf-8 stderr")
    }
}

fn list_json(env: &TestEnv) -> serde_json::Value {
    let stdout = env.run_ok(&["list", "--json"]);
    serde_json::from_str(&stdout).expect("valid JSON")
}

#[test]
fn test_add_list_round_trip() {
    let env = TestEnv::new();

    env.run_ok(&["add", "2025-01-01", "10", "Food", "groceries"]);
    env.run_ok(&["add", "2025-06-15", "5.5", "Transport"]);

    let expenses = list_json(&env);
    assert_eq!(expenses.as_array().unwrap().len(), 2);
    assert_eq!(expenses[0]["id"], 1);
    assert_eq!(expenses[0]["amount"], "10.00");
    assert_eq!(expenses[0]["description"], "groceries");
    assert_eq!(expenses[1]["id"], 2);
    assert_eq!(expenses[1]["amount"], "5.50");
    assert_eq!(expenses[1]["date"], "2025-06-15");
}

#[test]
fn test_add_rejects_bad_input() {
    let env = TestEnv::new();

    let stderr = env.run_err(&["add", "2025/01/01", "10", "Food"]);
    assert!(stderr.contains("Invalid"), "stderr: {stderr}");

    let stderr = env.run_err(&["add", "2025-01-01", "abc", "Food"]);
    assert!(stderr.contains("Invalid"), "stderr: {stderr}");

    let stderr = env.run_err(&["add", "2025-01-01", "-4", "Food"]);
    assert!(stderr.contains("non-negative"), "stderr: {stderr}");

    let stderr = env.run_err(&["add", "2025-01-01", "10", "   "]);
    assert!(stderr.contains("empty"), "stderr: {stderr}");

    // nothing was ever written
    assert!(list_json(&env).as_array().unwrap().is_empty());
}

#[test]
fn test_list_filters_by_range_and_category() {
    let env = TestEnv::new();
    env.run_ok(&["add", "2025-01-01", "10", "Food"]);
    env.run_ok(&["add", "2025-06-15", "5.50", "food"]);
    env.run_ok(&["add", "2025-12-31", "3", "Transport"]);

    let stdout = env.run_ok(&[
        "list",
        "--since",
        "2025-01-01",
        "--until",
        "2025-06-15",
        "--json",
    ]);
    let expenses: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(expenses.as_array().unwrap().len(), 2);

    let stdout = env.run_ok(&["list", "--category", "FOOD", "--json"]);
    let expenses: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(expenses.as_array().unwrap().len(), 2);

    let stderr = env.run_err(&["list", "--since", "2025-07-01", "--until", "2025-01-01"]);
    assert!(stderr.contains("Invalid range"), "stderr: {stderr}");
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let env = TestEnv::new();
    env.run_ok(&["add", "2025-01-01", "10", "Food", "weekly groceries"]);
    env.run_ok(&["add", "2025-01-02", "3", "Transport", "bus ticket"]);

    let stdout = env.run_ok(&["search", "GROCER", "--json"]);
    let hits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["category"], "Food");

    // empty query matches everything
    let stdout = env.run_ok(&["search", "", "--json"]);
    let hits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 2);
}

#[test]
fn test_summary_totals() {
    let env = TestEnv::new();
    env.run_ok(&["add", "2025-01-01", "10", "Food"]);
    env.run_ok(&["add", "2025-01-02", "5.50", "Food"]);
    env.run_ok(&["add", "2025-01-03", "3", "Transport"]);

    let stdout = env.run_ok(&["summary", "--json"]);
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["categories"]["Food"], "15.50");
    assert_eq!(summary["categories"]["Transport"], "3.00");
    assert_eq!(summary["overall"], "18.50");
}

#[test]
fn test_delete_and_noop_delete() {
    let env = TestEnv::new();
    env.run_ok(&["add", "2025-01-01", "10", "Food"]);
    env.run_ok(&["add", "2025-01-02", "5", "Food"]);

    let stdout = env.run_ok(&["delete", "99"]);
    assert!(stdout.contains("nothing deleted"), "stdout: {stdout}");
    assert_eq!(list_json(&env).as_array().unwrap().len(), 2);

    env.run_ok(&["delete", "1"]);
    let expenses = list_json(&env);
    assert_eq!(expenses.as_array().unwrap().len(), 1);
    assert_eq!(expenses[0]["id"], 2);
}

#[test]
fn test_edit_partial_update() {
    let env = TestEnv::new();
    env.run_ok(&["add", "2025-01-01", "10", "Food", "coffee"]);

    env.run_ok(&["edit", "1", "--amount", "12.345", "--category", "Drinks"]);

    let expenses = list_json(&env);
    assert_eq!(expenses[0]["amount"], "12.35");
    assert_eq!(expenses[0]["category"], "Drinks");
    // untouched fields survive
    assert_eq!(expenses[0]["date"], "2025-01-01");
    assert_eq!(expenses[0]["description"], "coffee");

    let stdout = env.run_ok(&["edit", "42", "--amount", "1"]);
    assert!(stdout.contains("nothing changed"), "stdout: {stdout}");

    let stderr = env.run_err(&["edit", "1"]);
    assert!(stderr.contains("Nothing to change"), "stderr: {stderr}");
}

#[test]
fn test_show_by_id() {
    let env = TestEnv::new();
    env.run_ok(&["add", "2025-01-01", "10", "Food", "groceries"]);

    let stdout = env.run_ok(&["show", "1", "--json"]);
    let expense: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(expense["category"], "Food");

    let stderr = env.run_err(&["show", "5"]);
    assert!(stderr.contains("No expense with id 5"), "stderr: {stderr}");
}

#[test]
fn test_export_writes_json_file() {
    let env = TestEnv::new();
    env.run_ok(&["add", "2025-01-01", "10", "Food"]);

    let out = env.dir.path().join("dump.json");
    env.run_ok(&["export", "--output", out.to_str().unwrap()]);

    let contents = std::fs::read_to_string(&out).unwrap();
    let expenses: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(expenses.as_array().unwrap().len(), 1);
}

#[test]
fn test_init_creates_ledger_and_config() {
    let env = TestEnv::new();
    let target = env.dir.path().join("book.csv");

    let stdout = env.run_ok(&["init", target.to_str().unwrap()]);
    assert!(stdout.contains("Initialized"), "stdout: {stdout}");
    assert!(target.exists());

    let config = std::fs::read_to_string(env.dir.path().join("config.toml")).unwrap();
    assert!(config.contains("book.csv"), "config: {config}");

    let stderr = env.run_err(&["init", target.to_str().unwrap()]);
    assert!(stderr.contains("already"), "stderr: {stderr}");
}

#[test]
fn test_check_reports_problems() {
    let env = TestEnv::new();
    env.run_ok(&["add", "2025-01-01", "10", "Food"]);
    assert!(env.run_ok(&["check"]).contains("looks good"));

    write_ledger(
        &env.ledger_path(),
        "id,date,amount,category,description\n\
         1,2025-01-01,10.00,Food,\n\
         1,2025-01-02,-4.00,,\n\
         ,2025-01-03,1.00,Misc,orphan\n",
    );

    let stderr = env.run_err(&["check"]);
    assert!(stderr.contains("duplicate id 1"), "stderr: {stderr}");
    assert!(stderr.contains("non-negative"), "stderr: {stderr}");
    assert!(stderr.contains("blank category"), "stderr: {stderr}");
    assert!(stderr.contains("missing id"), "stderr: {stderr}");
    assert!(stderr.contains("4 problem(s)"), "stderr: {stderr}");
}

#[test]
fn test_quiet_suppresses_receipts() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["--quiet", "add", "2025-01-01", "10", "Food"]);
    assert!(stdout.is_empty(), "stdout: {stdout}");
}

fn write_ledger(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("write ledger");
}
