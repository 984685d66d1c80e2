use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ONE_DAY_LOG, Sandbox};

#[test]
fn test_list_shows_days_totals_and_rows() {
    let sb = Sandbox::new();
    sb.write_log(
        r#"{
            "2024-01-01": [
                {"start": "09:00:00 AM", "end": "12:00:00 PM"},
                {"start": "01:00:00 PM", "end": "05:00:00 PM"}
            ],
            "2024-01-02": [{"start": "09:00:00 AM", "end": null}]
        }"#,
    );

    sb.wl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("2 interval(s)"))
        .stdout(contains("7.00"))
        .stdout(contains("01:00:00 PM"))
        .stdout(contains("2024-01-02"))
        .stdout(contains("--:--:-- --"));
}

#[test]
fn test_list_week_filters_other_weeks() {
    let sb = Sandbox::new();
    sb.write_log(
        r#"{
            "2023-12-29": [{"start": "09:00:00 AM", "end": "05:00:00 PM"}],
            "2024-01-01": [{"start": "09:00:00 AM", "end": "05:00:00 PM"}]
        }"#,
    );

    sb.wl_at("2024-01-03 09:00:00")
        .args(["list", "--week"])
        .assert()
        .success()
        .stdout(contains("2024-01-01").and(contains("2023-12-29").not()));
}

#[test]
fn test_list_empty_log() {
    let sb = Sandbox::new();

    sb.wl()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Work log is empty."));
}

#[test]
fn test_list_malformed_log_renders_error_in_place() {
    let sb = Sandbox::new();
    sb.write_log(r#"{"2024-01-01": [{"end": "05:00:00 PM"}]}"#);

    sb.wl()
        .arg("list")
        .assert()
        .success()
        .stderr(contains("Cannot render work log"));
}

#[test]
fn test_add_resorts_day_and_keeps_state() {
    let sb = Sandbox::new();
    sb.write_log(
        r#"{"2024-01-01": [{"start": "01:00:00 PM", "end": "05:00:00 PM"}], "state": "ended"}"#,
    );

    sb.wl()
        .args([
            "add",
            "2024-01-01",
            "--start",
            "08:00:00 AM",
            "--end",
            "12:00:00 PM",
        ])
        .assert()
        .success()
        .stdout(contains("Added interval #1 for 2024-01-01"));

    let log = sb.read_log();
    let day = log["2024-01-01"].as_array().unwrap();
    assert_eq!(day.len(), 2);
    assert_eq!(day[0]["start"], "08:00:00 AM");
    assert_eq!(day[1]["start"], "01:00:00 PM");
    assert_eq!(log["state"], "ended");
}

#[test]
fn test_add_creates_new_day() {
    let sb = Sandbox::new();
    sb.write_log(ONE_DAY_LOG);

    sb.wl()
        .args([
            "add",
            "2024-01-05",
            "--start",
            "10:00:00 AM",
            "--end",
            "11:15:00 AM",
        ])
        .assert()
        .success();

    let log = sb.read_log();
    assert_eq!(log["2024-01-05"][0]["end"], "11:15:00 AM");
    assert_eq!(log["2024-01-01"].as_array().unwrap().len(), 1);
}

#[test]
fn test_add_rejects_malformed_time() {
    let sb = Sandbox::new();
    sb.write_log(ONE_DAY_LOG);
    let before = sb.read_log_raw();

    sb.wl()
        .args(["add", "2024-01-01", "--start", "8:00", "--end", "12:00:00 PM"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 8:00"));

    assert_eq!(sb.read_log_raw(), before);
}

#[test]
fn test_add_rejects_malformed_date() {
    let sb = Sandbox::new();

    sb.wl()
        .args([
            "add",
            "01/01/2024",
            "--start",
            "08:00:00 AM",
            "--end",
            "12:00:00 PM",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_edit_updates_end_time() {
    let sb = Sandbox::new();
    sb.write_log(ONE_DAY_LOG);

    sb.wl()
        .args([
            "edit",
            "2024-01-01",
            "--index",
            "1",
            "--end",
            "06:30:00 PM",
        ])
        .assert()
        .success()
        .stdout(contains("09:00:00 AM - 06:30:00 PM"));

    let log = sb.read_log();
    assert_eq!(log["2024-01-01"][0]["start"], "09:00:00 AM");
    assert_eq!(log["2024-01-01"][0]["end"], "06:30:00 PM");
}

#[test]
fn test_edit_rejects_malformed_time() {
    let sb = Sandbox::new();
    sb.write_log(ONE_DAY_LOG);
    let before = sb.read_log_raw();

    sb.wl()
        .args(["edit", "2024-01-01", "--index", "1", "--end", "25:00:00 PM"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 25:00:00 PM"));

    assert_eq!(sb.read_log_raw(), before);
}

#[test]
fn test_edit_unknown_index_fails() {
    let sb = Sandbox::new();
    sb.write_log(ONE_DAY_LOG);

    sb.wl()
        .args(["edit", "2024-01-01", "--index", "4", "--start", "08:00:00 AM"])
        .assert()
        .failure()
        .stderr(contains("Invalid interval index 4"));
}

#[test]
fn test_edit_without_fields_fails() {
    let sb = Sandbox::new();
    sb.write_log(ONE_DAY_LOG);

    sb.wl()
        .args(["edit", "2024-01-01", "--index", "1"])
        .assert()
        .failure()
        .stderr(contains("Nothing to edit"));
}

#[test]
fn test_del_only_interval_removes_date_key() {
    let sb = Sandbox::new();
    sb.write_log(
        r#"{
            "2024-01-01": [{"start": "09:00:00 AM", "end": "05:00:00 PM"}],
            "2024-01-02": [{"start": "09:00:00 AM", "end": "10:00:00 AM"}],
            "state": "ended"
        }"#,
    );

    sb.wl()
        .args(["del", "2024-01-01", "--index", "1", "-y"])
        .assert()
        .success()
        .stdout(contains("has been deleted"))
        .stdout(contains("was removed from the log"));

    let log = sb.read_log();
    assert!(log.get("2024-01-01").is_none());
    assert!(log.get("2024-01-02").is_some());
    assert_eq!(log["state"], "ended");
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let sb = Sandbox::new();
    sb.write_log(ONE_DAY_LOG);
    let before = sb.read_log_raw();

    sb.wl()
        .args(["del", "2024-01-01", "--index", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(sb.read_log_raw(), before);
}

#[test]
fn test_del_unknown_date_fails() {
    let sb = Sandbox::new();
    sb.write_log(ONE_DAY_LOG);

    sb.wl()
        .args(["del", "2024-02-01", "--index", "1", "-y"])
        .assert()
        .failure()
        .stderr(contains("No entries found for date 2024-02-01"));
}
