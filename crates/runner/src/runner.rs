// SPDX-License-Identifier: MIT

//! The transfer job itself.

use std::path::PathBuf;

use tik_core::JobDetail;
use tracing::info;

use crate::error::TransferError;
use crate::fetch::Fetcher;
use crate::sink::FsSink;

/// What one runner invocation did.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Invoked without a job id.
    NothingToDo,
    /// Invoked with a job id but no detail payload.
    NoDetail,
    Transferred { bytes: usize, target: PathBuf },
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingToDo => write!(f, "No job ID provided. Nothing to do."),
            Self::NoDetail => write!(f, "No job detail provided. Nothing to do."),
            Self::Transferred { bytes, target } => {
                write!(f, "Transferred {bytes} bytes to {}.", target.display())
            }
        }
    }
}

/// Executes one transfer job: fetch `sourceUrl`, write the bytes at
/// `targetLocation` under the sink root.
pub struct Runner<F> {
    fetcher: F,
    sink: FsSink,
}

impl<F: Fetcher> Runner<F> {
    pub fn new(fetcher: F, sink: FsSink) -> Self {
        Self { fetcher, sink }
    }

    pub async fn run(
        &self,
        job_id: Option<&str>,
        detail: Option<&JobDetail>,
    ) -> Result<RunOutcome, TransferError> {
        let Some(job_id) = job_id else {
            return Ok(RunOutcome::NothingToDo);
        };
        info!(job = job_id, "job received");
        let Some(detail) = detail else {
            return Ok(RunOutcome::NoDetail);
        };

        let url = detail.source_url().ok_or(TransferError::MissingField("sourceUrl"))?;
        let location =
            detail.target_location().ok_or(TransferError::MissingField("targetLocation"))?;

        info!(job = job_id, url, location, "transfer start");
        let body = self.fetcher.fetch(url).await?;
        let target = self.sink.store(location, &body)?;
        info!(job = job_id, bytes = body.len(), target = %target.display(), "transfer done");
        Ok(RunOutcome::Transferred { bytes: body.len(), target })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
