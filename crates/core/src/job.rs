// SPDX-License-Identifier: MIT

//! Job record model: the unit the dispatcher schedules.
//!
//! Field names and serialized forms follow the external job-table contract:
//! `{jobId, schedule_expression, job_detail, job_status, next_fire_time}`.

use crate::id::JobId;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a job record.
///
/// Only `Ready` jobs are eligible for firing. The dispatcher transitions
/// `Ready -> Running` when it fires a job; nothing in this system transitions
/// `Running` back to `Ready` (see `JobStore::release` for the operator
/// affordance). `Disabled` and `Error` exist in the table contract but are
/// never set by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Ready,
    Running,
    Disabled,
    Error,
}

crate::simple_display! {
    JobStatus {
        Ready => "READY",
        Running => "RUNNING",
        Disabled => "DISABLED",
        Error => "ERROR",
    }
}

/// Opaque job payload, passed through to the runner unmodified.
///
/// The dispatcher never interprets this beyond serialization. The bundled
/// runner understands two fields: `sourceUrl` (a fetchable resource) and
/// `targetLocation` (a storage destination path).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobDetail(pub serde_json::Value);

impl JobDetail {
    pub fn source_url(&self) -> Option<&str> {
        self.0.get("sourceUrl").and_then(|v| v.as_str())
    }

    pub fn target_location(&self) -> Option<&str> {
        self.0.get("targetLocation").and_then(|v| v.as_str())
    }
}

impl From<serde_json::Value> for JobDetail {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// A persisted job record, keyed by `job_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "jobId")]
    pub job_id: JobId,
    /// Cron-style recurrence expression (see [`crate::Schedule`]).
    pub schedule_expression: String,
    pub job_detail: JobDetail,
    pub job_status: JobStatus,
    /// Earliest Unix timestamp (seconds) at which the job becomes eligible.
    ///
    /// Always points at the next scheduled occurrence after the last
    /// dispatch; it is stale (in the past) only between becoming due and
    /// being processed by a dispatcher tick.
    pub next_fire_time: i64,
}

impl JobRecord {
    pub fn new(
        job_id: impl Into<JobId>,
        schedule_expression: impl Into<String>,
        job_detail: JobDetail,
        next_fire_time: i64,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            schedule_expression: schedule_expression.into(),
            job_detail,
            job_status: JobStatus::Ready,
            next_fire_time,
        }
    }

    /// A job is due when its fire time has passed and it is still `Ready`.
    pub fn is_due(&self, now_ts: i64) -> bool {
        self.job_status == JobStatus::Ready && self.next_fire_time < now_ts
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
