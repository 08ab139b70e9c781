// SPDX-License-Identifier: MIT

//! `tik serve`: dispatch cycles on an interval.

use anyhow::Result;
use tik_core::SystemClock;
use tik_dispatch::{Dispatcher, ProcessInvoker};
use tik_store::FileJobStore;
use tracing::{error, info};

use crate::env;

pub async fn run() -> Result<()> {
    let store = FileJobStore::new(env::jobs_path()?);
    let invoker = ProcessInvoker::new(env::runner_bin()?);
    let dispatcher = Dispatcher::new(store, invoker, SystemClock);

    let period = env::tick_interval();
    info!(period_ms = period.as_millis() as u64, "serve loop starting");
    let mut ticker = tokio::time::interval(period);
    // A long cycle delays the next tick instead of stacking ticks.
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match dispatcher.run_cycle().await {
                    Ok(report) if report.is_clean() => {
                        info!(%report, "cycle complete");
                    }
                    Ok(report) => {
                        error!(%report, "cycle completed with failures");
                    }
                    // A failed due-job query skips this tick, not the loop.
                    Err(err) => error!("cycle failed: {err}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, shutting down");
                return Ok(());
            }
        }
    }
}
