//! CLI smoke tests
//!
//! Runs the binary against an isolated config directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn aispend(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aispend").unwrap();
    cmd.env("AISPEND_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn test_no_args_prints_hints() {
    let dir = TempDir::new().unwrap();
    aispend(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("aispend tui"));
}

#[test]
fn test_list_shows_seeded_services() {
    let dir = TempDir::new().unwrap();
    aispend(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ChatGPT Plus"))
        .stdout(predicate::str::contains("Claude Pro"))
        .stdout(predicate::str::contains("$20.00/month"))
        .stdout(predicate::str::contains("$50.00 One-time"));
}

#[test]
fn test_stats_reports_totals() {
    let dir = TempDir::new().unwrap();
    // Seed: three $20/$20/$10 monthly subscriptions + $50 one-time
    aispend(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Spending"))
        .stdout(predicate::str::contains("$50.00"))
        .stdout(predicate::str::contains("$650.00"))
        .stdout(predicate::str::contains("OpenAI"))
        .stdout(predicate::str::contains("Anthropic"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();
    aispend(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Currency symbol: $"));
}
