// SPDX-License-Identifier: MIT

//! `tik tick`: one dispatch cycle.

use anyhow::{anyhow, Result};
use clap::Args;
use tik_core::SystemClock;
use tik_dispatch::{Dispatcher, ProcessInvoker};
use tik_store::FileJobStore;

use crate::env;

#[derive(Args)]
pub struct TickArgs {
    /// Reference Unix timestamp in seconds (defaults to the current time)
    #[arg(long)]
    pub at: Option<i64>,
}

pub async fn run(args: TickArgs) -> Result<()> {
    let store = FileJobStore::new(env::jobs_path()?);
    let invoker = ProcessInvoker::new(env::runner_bin()?);
    let dispatcher = Dispatcher::new(store, invoker, SystemClock);

    let report = match args.at {
        Some(ts) => {
            let at = chrono::DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| anyhow!("invalid timestamp: {ts}"))?;
            dispatcher.run_cycle_at(at).await?
        }
        None => dispatcher.run_cycle().await?,
    };

    println!("{report}");
    for (id, err) in &report.skipped_invalid {
        println!("skipped {id}: {err}");
    }
    for (id, err) in &report.failed {
        println!("failed {id}: {err}");
    }
    Ok(())
}
