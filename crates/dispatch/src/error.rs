// SPDX-License-Identifier: MIT

//! Dispatch error types.

use thiserror::Error;
use tik_core::JobStatus;
use tik_store::StoreError;

/// Failure to hand a job off to the runner.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("serializing runner payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("spawning runner '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Invocation target unavailable (used by fakes for failure injection).
    #[error("runner unavailable: {0}")]
    Unavailable(String),
}

/// Per-job failure within a dispatch cycle.
///
/// These never abort the cycle; they are collected into the
/// [`crate::CycleReport`] and surfaced through tracing.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Invocation(#[from] InvokeError),

    /// The runner was invoked but the record could not be advanced; the
    /// job may double-fire on the next tick.
    #[error("rescheduling after invocation: {0}")]
    Persistence(#[from] StoreError),

    /// Another writer transitioned the record first; the schedule was not
    /// advanced by this dispatcher.
    #[error("dispatch lost, record is now {current}")]
    Lost { current: JobStatus },

    /// The expression parsed but has no occurrence after the reference
    /// time (only possible for schedules bounded into the past).
    #[error("schedule has no next occurrence")]
    NoNextOccurrence,
}

/// Cycle-level failure: only the due-job query can fail the whole cycle.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("querying due jobs: {0}")]
    DueQuery(#[from] StoreError),
}
