//! CLI tests driving the compiled binary against a fixture file.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const DOCUMENT: &str = r#"{
    "fixtures": [
        {
            "id": 1001,
            "homeTeam": {"id": 1, "name": "Arsenal"},
            "awayTeam": {"id": 2, "name": "Chelsea"},
            "startTime": "2030-05-02T19:45:00Z",
            "status": "Upcoming",
            "quotes": [
                {"providerId": 10, "providerName": "10Bet", "outcomeLabel": "Home", "price": 1.70, "marketId": 1},
                {"providerId": 11, "providerName": "Bet365", "outcomeLabel": "Home", "price": 1.80, "marketId": 1},
                {"providerId": 10, "providerName": "10Bet", "outcomeLabel": "Draw", "price": 3.55, "marketId": 1}
            ]
        },
        {
            "id": 1002,
            "homeTeam": {"id": 3, "name": "Leeds"},
            "awayTeam": {"id": 4, "name": "Everton"},
            "startTime": "2030-05-02T15:00:00Z",
            "status": "Upcoming",
            "quotes": [
                {"providerId": 11, "providerName": "Bet365", "outcomeLabel": "Home", "price": 2.20, "marketId": 2}
            ]
        }
    ]
}"#;

fn document_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();
    file
}

fn oddsfold() -> Command {
    Command::cargo_bin("oddsfold").unwrap()
}

#[test]
fn prices_lists_fixtures_with_best_chips() {
    let file = document_file();

    oddsfold()
        .args(["prices", "--date", "2030-05-02"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Arsenal v Chelsea"))
        .stdout(predicate::str::contains("1 1.80 (Bet365)"))
        .stdout(predicate::str::contains("X 3.55 (10Bet)"))
        .stdout(predicate::str::contains("2 - N/A"));
}

#[test]
fn prices_reports_an_empty_date() {
    let file = document_file();

    oddsfold()
        .args(["prices", "--date", "2030-06-01"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No fixtures found."));
}

#[test]
fn table_renders_one_row_per_bookmaker() {
    let file = document_file();

    oddsfold()
        .args(["table", "1001"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmaker"))
        .stdout(predicate::str::contains("10Bet"))
        .stdout(predicate::str::contains("Bet365"));
}

#[test]
fn table_for_unknown_fixture_fails() {
    let file = document_file();

    oddsfold()
        .args(["table", "9999"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fixture 9999 not found"));
}

#[test]
fn acca_ranks_bookmakers_and_flags_best_value() {
    let file = document_file();

    oddsfold()
        .args([
            "acca",
            "--pick",
            "1001:home",
            "--pick",
            "1002:home",
            "--stake",
            "10",
        ])
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Accumulator slip"))
        .stdout(predicate::str::contains("Bookmaker comparison"))
        .stdout(predicate::str::contains("best value"))
        // Bet365 covers both legs: 1.80 * 2.20 = 3.96, returning 39.60.
        .stdout(predicate::str::contains("total 3.96"))
        .stdout(predicate::str::contains("returns 39.60"));
}

#[test]
fn acca_rejects_a_malformed_pick() {
    let file = document_file();

    oddsfold()
        .args(["acca", "--pick", "1001-home", "--pick", "1002:home"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIXTURE:OUTCOME"));
}

#[test]
fn acca_rejects_an_unknown_outcome_label() {
    let file = document_file();

    oddsfold()
        .args(["acca", "--pick", "1001:treble", "--pick", "1002:home"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown outcome label"));
}
