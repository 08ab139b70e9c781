// SPDX-License-Identifier: MIT

use super::*;
use serde_json::json;
use std::time::Duration;
use tik_core::JobDetail;

fn payload(id: &str) -> InvokePayload {
    InvokePayload {
        job_id: id.into(),
        job_detail: JobDetail(json!({"sourceUrl": "http://x/f", "targetLocation": "a/b"})),
    }
}

#[test]
fn payload_serializes_with_the_jobid_wire_key() {
    let value = serde_json::to_value(payload("job-1")).unwrap();
    assert_eq!(value["jobId"], "job-1");
    assert_eq!(value["job_detail"]["sourceUrl"], "http://x/f");
    assert!(value.get("job_id").is_none());
}

#[test]
fn payload_round_trips() {
    let original = payload("job-1");
    let json = serde_json::to_string(&original).unwrap();
    let parsed: InvokePayload = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[tokio::test]
async fn process_invoker_passes_id_as_argv1_and_payload_in_env() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let script = dir.path().join("runner.sh");
    std::fs::write(
        &script,
        format!("#!/bin/sh\nprintf '%s\\n%s\\n' \"$1\" \"$JOB_DETAIL\" > {}\n", out.display()),
    )
    .unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    std::os::unix::fs::PermissionsExt::set_mode(&mut perms, 0o755);
    std::fs::set_permissions(&script, perms).unwrap();

    let sent = payload("job-argv");
    ProcessInvoker::new(&script).invoke(&sent).await.unwrap();

    // Fire-and-forget: the child finishes on its own schedule.
    let mut contents = String::new();
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if let Ok(text) = std::fs::read_to_string(&out) {
            if text.lines().count() >= 2 {
                contents = text;
                break;
            }
        }
    }
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("job-argv"));
    let received: InvokePayload = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(received, sent);
}

#[tokio::test]
async fn process_invoker_reports_a_missing_program() {
    let err = ProcessInvoker::new("/nonexistent/tik-runner")
        .invoke(&payload("job-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, InvokeError::Spawn { .. }));
}

#[tokio::test]
async fn fake_invoker_records_and_injects_failures() {
    let fake = FakeInvoker::new();
    fake.fail_for("job-bad");

    fake.invoke(&payload("job-ok")).await.unwrap();
    let err = fake.invoke(&payload("job-bad")).await.unwrap_err();

    assert!(matches!(err, InvokeError::Unavailable(_)));
    assert_eq!(fake.invoked_ids(), vec!["job-ok"]);
}
