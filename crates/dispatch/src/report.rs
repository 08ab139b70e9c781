// SPDX-License-Identifier: MIT

//! Per-cycle outcome summary.

use tik_core::{JobId, ScheduleError};

use crate::error::CycleError;

/// What one dispatch cycle did.
///
/// `skipped_invalid` jobs were neither invoked nor mutated; they will be
/// re-selected and re-skipped every tick until an operator fixes the
/// expression. `failed` jobs were left in whatever state they reached.
#[derive(Debug, Default)]
pub struct CycleReport {
    /// Number of due jobs the cycle examined.
    pub examined: usize,
    /// Jobs invoked and rescheduled.
    pub dispatched: Vec<JobId>,
    /// Jobs skipped because their expression failed validation.
    pub skipped_invalid: Vec<(JobId, ScheduleError)>,
    /// Jobs whose invocation or reschedule failed.
    pub failed: Vec<(JobId, CycleError)>,
}

impl CycleReport {
    pub(crate) fn new(examined: usize) -> Self {
        Self { examined, ..Self::default() }
    }

    pub fn is_clean(&self) -> bool {
        self.skipped_invalid.is_empty() && self.failed.is_empty()
    }
}

impl std::fmt::Display for CycleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "examined={} dispatched={} skipped={} failed={}",
            self.examined,
            self.dispatched.len(),
            self.skipped_invalid.len(),
            self.failed.len()
        )
    }
}
