// SPDX-License-Identifier: MIT

//! `tik run`: execute one job as the runner.
//!
//! Invoked by the dispatcher with the job id as the first argument and the
//! payload JSON in the `JOB_DETAIL` environment variable. Also usable by
//! hand for debugging a job's transfer.

use anyhow::{Context, Result};
use clap::Args;
use tik_dispatch::InvokePayload;
use tik_runner::{FsSink, HttpFetcher, RunOutcome, Runner};

use crate::env;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct RunArgs {
    /// Job id to run (omitting it is a no-op)
    pub job_id: Option<String>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    // No job id means nothing to fetch; don't even require a target root.
    let Some(job_id) = args.job_id.as_deref() else {
        println!("{}", RunOutcome::NothingToDo);
        return Ok(());
    };

    let payload = match env::job_detail() {
        Some(raw) => Some(
            serde_json::from_str::<InvokePayload>(&raw).context("parsing JOB_DETAIL")?,
        ),
        None => None,
    };

    let runner = Runner::new(HttpFetcher::new(), FsSink::new(env::target_root()?));
    let outcome = runner
        .run(Some(job_id), payload.as_ref().map(|p| &p.job_detail))
        .await
        .map_err(|err| ExitError::new(1, format!("transfer failed: {err}")))?;

    println!("{outcome}");
    Ok(())
}
