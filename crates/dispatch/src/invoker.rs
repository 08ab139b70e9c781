// SPDX-License-Identifier: MIT

//! Runner invocation: the asynchronous hand-off boundary.
//!
//! Invocation is fire-and-forget: `Ok` means the trigger was delivered,
//! never that the job's work succeeded. The dispatcher imposes no timeout
//! and has no cancellation path into a running job.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tik_core::{JobDetail, JobId};
use tracing::debug;

use crate::error::InvokeError;

/// Payload delivered to the runner: `{jobId, job_detail}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokePayload {
    #[serde(rename = "jobId")]
    pub job_id: JobId,
    pub job_detail: JobDetail,
}

#[async_trait]
pub trait RunnerInvoker: Send + Sync {
    /// Trigger the runner for one job. Returns once the invocation has
    /// been handed off.
    async fn invoke(&self, payload: &InvokePayload) -> Result<(), InvokeError>;
}

/// Invoker that spawns the configured runner program.
///
/// Wire contract (shared with the bundled `tik run` runner): the job id is
/// argv[1] and the full payload JSON rides in the `JOB_DETAIL` environment
/// variable. The child is not awaited; a background task reaps it so it
/// never lingers as a zombie.
pub struct ProcessInvoker {
    program: PathBuf,
}

impl ProcessInvoker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl RunnerInvoker for ProcessInvoker {
    async fn invoke(&self, payload: &InvokePayload) -> Result<(), InvokeError> {
        let detail_json = serde_json::to_string(payload)?;
        let mut child = tokio::process::Command::new(&self.program)
            .arg(payload.job_id.as_str())
            .env("JOB_DETAIL", detail_json)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| InvokeError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;
        debug!(job = %payload.job_id, program = %self.program.display(), "runner spawned");
        tokio::spawn(async move {
            let _ = child.wait().await;
        });
        Ok(())
    }
}

/// Recording invoker for tests, with failure injection.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Default)]
pub struct FakeInvoker {
    inner: std::sync::Arc<parking_lot::Mutex<FakeInner>>,
}

#[cfg(any(test, feature = "test-support"))]
#[derive(Default)]
struct FakeInner {
    invocations: Vec<InvokePayload>,
    fail_for: std::collections::HashSet<String>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail invocations for the given job id.
    pub fn fail_for(&self, job_id: &str) {
        self.inner.lock().fail_for.insert(job_id.to_string());
    }

    pub fn invocations(&self) -> Vec<InvokePayload> {
        self.inner.lock().invocations.clone()
    }

    pub fn invoked_ids(&self) -> Vec<String> {
        self.inner.lock().invocations.iter().map(|p| p.job_id.to_string()).collect()
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl RunnerInvoker for FakeInvoker {
    async fn invoke(&self, payload: &InvokePayload) -> Result<(), InvokeError> {
        let mut inner = self.inner.lock();
        if inner.fail_for.contains(payload.job_id.as_str()) {
            return Err(InvokeError::Unavailable(format!(
                "injected failure for {}",
                payload.job_id
            )));
        }
        inner.invocations.push(payload.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "invoker_tests.rs"]
mod tests;
