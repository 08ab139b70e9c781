// SPDX-License-Identifier: MIT

//! Tests for `tik run` runner behavior.

use std::io::{Read, Write};
use std::net::TcpListener;

use crate::prelude::*;

#[test]
fn run_without_a_job_id_does_nothing() {
    let temp = Project::empty();
    temp.tik().arg("run").passes().stdout_has("No job ID provided. Nothing to do.");
}

#[test]
fn run_without_a_detail_payload_does_nothing() {
    let temp = Project::empty();
    temp.tik()
        .args(["run", "job-a"])
        .passes()
        .stdout_has("No job detail provided. Nothing to do.");
}

#[test]
fn run_with_an_incomplete_detail_fails() {
    let temp = Project::empty();
    temp.tik()
        .args(["run", "job-a"])
        .env("JOB_DETAIL", r#"{"jobId":"job-a","job_detail":{"targetLocation":"out"}}"#)
        .fails()
        .stderr_has("missing 'sourceUrl'");
}

#[test]
fn run_with_unparseable_detail_fails() {
    let temp = Project::empty();
    temp.tik()
        .args(["run", "job-a"])
        .env("JOB_DETAIL", "not json")
        .fails()
        .stderr_has("parsing JOB_DETAIL");
}

#[test]
fn run_transfers_a_file_end_to_end() {
    let temp = Project::empty();

    // One-shot HTTP server standing in for the source.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 2048];
        let _ = stream.read(&mut buf);
        stream
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
            )
            .unwrap();
    });

    let detail = format!(
        r#"{{"jobId":"job-a","job_detail":{{"sourceUrl":"http://{addr}/f.txt","targetLocation":"drop/f.txt"}}}}"#
    );
    temp.tik()
        .args(["run", "job-a"])
        .env("JOB_DETAIL", detail)
        .passes()
        .stdout_has("Transferred 5 bytes");
    server.join().unwrap();

    let target = temp.target_root().join("drop/f.txt");
    assert_eq!(std::fs::read(target).unwrap(), b"hello");
}

#[test]
fn run_fails_when_the_source_is_unreachable() {
    let temp = Project::empty();
    // Bind then drop so the port is very likely closed.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let detail = format!(
        r#"{{"jobId":"job-a","job_detail":{{"sourceUrl":"http://{addr}/f","targetLocation":"drop/f"}}}}"#
    );
    temp.tik()
        .args(["run", "job-a"])
        .env("JOB_DETAIL", detail)
        .fails()
        .stderr_has("transfer failed");
}
