// SPDX-License-Identifier: MIT

//! Tests for `tik tick` dispatch behavior.
//!
//! `--at 1700000000` pins the cycle at 2023-11-14T22:13:20Z; the next
//! `*/15 * * * *` occurrence after that is 22:15:00 (1700000100).

use crate::prelude::*;
use serde_json::json;

fn seed(temp: &Project, expression: &str, status: &str, next_fire: i64) {
    temp.seed_jobs(json!({
        "job-a": {
            "jobId": "job-a",
            "schedule_expression": expression,
            "job_detail": {"sourceUrl": "http://files.test/f", "targetLocation": "drop/f"},
            "job_status": status,
            "next_fire_time": next_fire
        }
    }));
}

#[test]
fn due_job_transitions_to_running_with_a_new_fire_time() {
    let temp = Project::empty();
    seed(&temp, "*/15 * * * *", "READY", 1_699_999_999);

    temp.tik().args(["tick", "--at", "1700000000"]).passes().stdout_has("dispatched=1");

    let record = &temp.jobs_table()["job-a"];
    assert_eq!(record["job_status"], "RUNNING");
    assert_eq!(record["next_fire_time"], 1_700_000_100);
}

#[test]
fn invalid_expression_is_skipped_and_left_intact() {
    let temp = Project::empty();
    seed(&temp, "99 * * * *", "READY", 1_699_999_999);

    temp.tik()
        .args(["tick", "--at", "1700000000"])
        .passes()
        .stdout_has("skipped=1")
        .stdout_has("skipped job-a");

    // Untouched: still READY with the stale fire time.
    let record = &temp.jobs_table()["job-a"];
    assert_eq!(record["job_status"], "READY");
    assert_eq!(record["next_fire_time"], 1_699_999_999);
}

#[test]
fn fire_time_equal_to_the_tick_is_not_yet_due() {
    let temp = Project::empty();
    seed(&temp, "*/15 * * * *", "READY", 1_700_000_000);

    temp.tik().args(["tick", "--at", "1700000000"]).passes().stdout_has("dispatched=0");
    assert_eq!(temp.jobs_table()["job-a"]["job_status"], "READY");
}

#[test]
fn running_job_is_not_redispatched() {
    let temp = Project::empty();
    seed(&temp, "*/15 * * * *", "RUNNING", 1_699_999_999);

    temp.tik().args(["tick", "--at", "1700000000"]).passes().stdout_has("examined=0");
    assert_eq!(temp.jobs_table()["job-a"]["next_fire_time"], 1_699_999_999);
}

#[test]
fn runner_receives_the_job_id_and_payload() {
    let temp = Project::empty();
    seed(&temp, "*/15 * * * *", "READY", 1_699_999_999);
    let marker = temp.path("marker.txt");
    let runner = temp.script(
        "runner.sh",
        &format!("#!/bin/sh\nprintf '%s\\n%s\\n' \"$1\" \"$JOB_DETAIL\" > {}\n", marker.display()),
    );

    temp.tik()
        .args(["tick", "--at", "1700000000"])
        .env("TIK_RUNNER_BIN", &runner)
        .passes()
        .stdout_has("dispatched=1");

    // The spawned runner finishes on its own schedule.
    let mut contents = String::new();
    for _ in 0..50 {
        std::thread::sleep(std::time::Duration::from_millis(20));
        if let Ok(text) = std::fs::read_to_string(&marker) {
            if text.lines().count() >= 2 {
                contents = text;
                break;
            }
        }
    }
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("job-a"));
    let payload: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(payload["jobId"], "job-a");
    assert_eq!(payload["job_detail"]["sourceUrl"], "http://files.test/f");
}

#[test]
fn unspawnable_runner_is_reported_and_the_job_stays_ready() {
    let temp = Project::empty();
    seed(&temp, "*/15 * * * *", "READY", 1_699_999_999);

    temp.tik()
        .args(["tick", "--at", "1700000000"])
        .env("TIK_RUNNER_BIN", "/nonexistent/tik-runner")
        .passes()
        .stdout_has("failed=1")
        .stdout_has("failed job-a");

    let record = &temp.jobs_table()["job-a"];
    assert_eq!(record["job_status"], "READY");
    assert_eq!(record["next_fire_time"], 1_699_999_999);
}

#[test]
fn empty_table_ticks_cleanly() {
    let temp = Project::empty();
    temp.tik()
        .args(["tick", "--at", "1700000000"])
        .passes()
        .stdout_has("examined=0 dispatched=0 skipped=0 failed=0");
}
