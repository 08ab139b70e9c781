// SPDX-License-Identifier: MIT

//! Tests for `tik jobs` table management.

use crate::prelude::*;
use serde_json::json;

#[test]
fn add_then_list_shows_the_job() {
    let temp = Project::empty();
    temp.tik()
        .args([
            "jobs",
            "add",
            "--id",
            "job-a",
            "--schedule",
            "*/15 * * * *",
            "--detail",
            r#"{"sourceUrl":"http://files.test/f.csv","targetLocation":"drop/f.csv"}"#,
            "--next-fire",
            "1700000100",
        ])
        .passes()
        .stdout_has("added job-a");

    temp.tik()
        .args(["jobs", "list"])
        .passes()
        .stdout_has("job-a")
        .stdout_has("READY")
        .stdout_has("*/15 * * * *");
}

#[test]
fn add_rejects_an_out_of_range_expression() {
    let temp = Project::empty();
    temp.tik()
        .args(["jobs", "add", "--schedule", "99 * * * *"])
        .fails()
        .stderr_has("invalid cron expression");
    assert!(!temp.jobs_path().exists());
}

#[test]
fn add_rejects_a_wrong_field_count() {
    let temp = Project::empty();
    temp.tik()
        .args(["jobs", "add", "--schedule", "* * *"])
        .fails()
        .stderr_has("5 or 6 fields");
}

#[test]
fn add_defaults_the_first_fire_to_the_next_occurrence() {
    let temp = Project::empty();
    temp.tik()
        .args(["jobs", "add", "--id", "job-a", "--schedule", "* * * * *"])
        .passes();

    let output = temp.tik().args(["jobs", "show", "job-a"]).passes();
    let record: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(record["jobId"], "job-a");
    assert_eq!(record["job_status"], "READY");
    // Next whole minute is strictly in the future.
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    assert!(record["next_fire_time"].as_i64().unwrap() > now);
}

#[test]
fn add_generates_an_id_when_omitted() {
    let temp = Project::empty();
    temp.tik()
        .args(["jobs", "add", "--schedule", "* * * * *"])
        .passes()
        .stdout_has("added job-");
}

#[test]
fn show_unknown_job_fails() {
    let temp = Project::empty();
    temp.tik().args(["jobs", "show", "job-missing"]).fails().stderr_has("no such job");
}

#[test]
fn remove_deletes_the_record() {
    let temp = Project::empty();
    temp.tik().args(["jobs", "add", "--id", "job-a", "--schedule", "* * * * *"]).passes();
    temp.tik().args(["jobs", "remove", "job-a"]).passes().stdout_has("removed job-a");
    temp.tik().args(["jobs", "show", "job-a"]).fails();
}

#[test]
fn release_returns_a_running_job_to_ready() {
    let temp = Project::empty();
    temp.seed_jobs(json!({
        "job-a": {
            "jobId": "job-a",
            "schedule_expression": "*/15 * * * *",
            "job_detail": {},
            "job_status": "RUNNING",
            "next_fire_time": 1_700_000_100
        }
    }));

    temp.tik().args(["jobs", "release", "job-a"]).passes().stdout_has("released job-a");
    assert_eq!(temp.jobs_table()["job-a"]["job_status"], "READY");

    // A second release finds the job already READY.
    temp.tik().args(["jobs", "release", "job-a"]).fails().stderr_has("not RUNNING");
}
