// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tik-store: the durable job table.
//!
//! The dispatcher is the table's sole writer for `job_status` and
//! `next_fire_time`; record creation and deletion happen out-of-band
//! through the maintenance operations.

mod error;
mod file;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use error::StoreError;
pub use file::FileJobStore;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryJobStore;

use tik_core::{JobId, JobRecord, JobStatus};

/// Result of a conditional status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The transition was applied.
    Applied,
    /// The record was no longer in the expected status; nothing was written.
    Lost { current: JobStatus },
}

/// The job table interface the dispatcher core needs.
///
/// Implementations are injected into the dispatcher (no process-wide
/// singletons), so tests substitute fakes freely.
pub trait JobStore: Send + Sync {
    /// All records due at `now_ts`: `job_status == READY` and
    /// `next_fire_time < now_ts`. Full-scan semantics are acceptable at
    /// this scale; larger tables want an index on `next_fire_time`.
    fn due_jobs(&self, now_ts: i64) -> Result<Vec<JobRecord>, StoreError>;

    /// Conditionally advance a fired job: set `RUNNING` and the new
    /// `next_fire_time` only if the record is still `READY`.
    ///
    /// The condition makes a race between two dispatcher ticks observable:
    /// the loser gets [`UpdateOutcome::Lost`] instead of double-advancing
    /// the schedule.
    fn mark_dispatched(&self, id: &JobId, next_fire_ts: i64)
        -> Result<UpdateOutcome, StoreError>;

    /// Transition `RUNNING -> READY` without touching `next_fire_time`.
    ///
    /// Never called during a dispatch cycle; this is the hook for whatever
    /// external process records job completion.
    fn release(&self, id: &JobId) -> Result<UpdateOutcome, StoreError>;

    /// Insert or replace a record (out-of-band maintenance).
    fn put(&self, record: JobRecord) -> Result<(), StoreError>;

    fn get(&self, id: &JobId) -> Result<Option<JobRecord>, StoreError>;

    fn list(&self) -> Result<Vec<JobRecord>, StoreError>;

    /// Remove a record. Returns false if it did not exist.
    fn remove(&self, id: &JobId) -> Result<bool, StoreError>;
}
