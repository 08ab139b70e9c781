// SPDX-License-Identifier: MIT

//! The dispatch cycle: select due jobs, fire, reschedule.

use chrono::{DateTime, Utc};
use tik_core::{Clock, JobRecord, Schedule, ScheduleError};
use tik_store::{JobStore, UpdateOutcome};
use tracing::{error, info, warn};

use crate::error::{CycleError, DispatchError};
use crate::invoker::{InvokePayload, RunnerInvoker};
use crate::report::CycleReport;

/// Drives the dispatch-and-reschedule cycle over injected handles.
///
/// One instance is assumed to be active at a time (single-writer); the
/// store's conditional update makes a violated assumption observable
/// rather than silently double-advancing schedules.
pub struct Dispatcher<S, I, C> {
    store: S,
    invoker: I,
    clock: C,
}

enum JobFailure {
    InvalidSchedule(ScheduleError),
    Cycle(CycleError),
}

impl<S, I, C> Dispatcher<S, I, C>
where
    S: JobStore,
    I: RunnerInvoker,
    C: Clock,
{
    pub fn new(store: S, invoker: I, clock: C) -> Self {
        Self { store, invoker, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one cycle at the clock's current time.
    pub async fn run_cycle(&self) -> Result<CycleReport, DispatchError> {
        self.run_cycle_at(self.clock.now_utc()).await
    }

    /// Run one cycle with an explicit reference time.
    ///
    /// `now` is both the due-selection cutoff and the reference for
    /// next-occurrence computation: the next fire time is computed from
    /// the tick, not from the job's stale `next_fire_time`, so a delayed
    /// tick shifts the schedule rather than catching up.
    pub async fn run_cycle_at(&self, now: DateTime<Utc>) -> Result<CycleReport, DispatchError> {
        let now_ts = now.timestamp();
        let due = self.store.due_jobs(now_ts)?;
        info!(count = due.len(), now = now_ts, "dispatch cycle start");

        let mut report = CycleReport::new(due.len());
        for job in due {
            match self.process_job(&job, now).await {
                Ok(next_fire_ts) => {
                    info!(job = %job.job_id, next_fire = next_fire_ts, "job dispatched");
                    report.dispatched.push(job.job_id);
                }
                Err(JobFailure::InvalidSchedule(e)) => {
                    warn!(job = %job.job_id, expression = %job.schedule_expression,
                        "skipping job with invalid schedule: {e}");
                    report.skipped_invalid.push((job.job_id, e));
                }
                Err(JobFailure::Cycle(e)) => {
                    error!(job = %job.job_id, "dispatch failed: {e}");
                    report.failed.push((job.job_id, e));
                }
            }
        }
        Ok(report)
    }

    /// Validate, invoke, and reschedule one job. Returns the persisted
    /// next fire time.
    async fn process_job(
        &self,
        job: &JobRecord,
        now: DateTime<Utc>,
    ) -> Result<i64, JobFailure> {
        // Validate before anything else: a malformed expression must not
        // reach the runner or mutate the record.
        let schedule =
            Schedule::parse(&job.schedule_expression).map_err(JobFailure::InvalidSchedule)?;

        let payload = InvokePayload {
            job_id: job.job_id.clone(),
            job_detail: job.job_detail.clone(),
        };
        self.invoker
            .invoke(&payload)
            .await
            .map_err(|e| JobFailure::Cycle(CycleError::Invocation(e)))?;

        let next = schedule
            .next_after(now)
            .ok_or(JobFailure::Cycle(CycleError::NoNextOccurrence))?;
        let next_fire_ts = next.timestamp();

        match self.store.mark_dispatched(&job.job_id, next_fire_ts) {
            Ok(UpdateOutcome::Applied) => Ok(next_fire_ts),
            Ok(UpdateOutcome::Lost { current }) => {
                Err(JobFailure::Cycle(CycleError::Lost { current }))
            }
            Err(e) => Err(JobFailure::Cycle(CycleError::Persistence(e))),
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
