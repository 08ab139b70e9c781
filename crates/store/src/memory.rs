// SPDX-License-Identifier: MIT

//! In-memory job table for tests.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tik_core::{JobId, JobRecord, JobStatus};

use crate::{JobStore, StoreError, UpdateOutcome};

/// HashMap-backed store with failure injection, shareable across clones.
#[derive(Clone, Default)]
pub struct MemoryJobStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    table: HashMap<String, JobRecord>,
    fail_due_jobs: bool,
    fail_mark_dispatched: bool,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = JobRecord>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock();
            for record in records {
                inner.table.insert(record.job_id.to_string(), record);
            }
        }
        store
    }

    /// Make every `due_jobs` call fail until cleared.
    pub fn fail_due_jobs(&self, fail: bool) {
        self.inner.lock().fail_due_jobs = fail;
    }

    /// Make every `mark_dispatched` call fail until cleared.
    pub fn fail_mark_dispatched(&self, fail: bool) {
        self.inner.lock().fail_mark_dispatched = fail;
    }

    /// Snapshot a record for assertions.
    pub fn snapshot(&self, id: &str) -> Option<JobRecord> {
        self.inner.lock().table.get(id).cloned()
    }
}

impl JobStore for MemoryJobStore {
    fn due_jobs(&self, now_ts: i64) -> Result<Vec<JobRecord>, StoreError> {
        let inner = self.inner.lock();
        if inner.fail_due_jobs {
            return Err(StoreError::Unavailable("injected due_jobs failure".into()));
        }
        let mut due: Vec<JobRecord> =
            inner.table.values().filter(|r| r.is_due(now_ts)).cloned().collect();
        // Deterministic order for test assertions; the contract promises none.
        due.sort_by(|a, b| a.job_id.as_str().cmp(b.job_id.as_str()));
        Ok(due)
    }

    fn mark_dispatched(
        &self,
        id: &JobId,
        next_fire_ts: i64,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut inner = self.inner.lock();
        if inner.fail_mark_dispatched {
            return Err(StoreError::Unavailable("injected mark_dispatched failure".into()));
        }
        let record = inner
            .table
            .get_mut(id.as_str())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if record.job_status != JobStatus::Ready {
            return Ok(UpdateOutcome::Lost { current: record.job_status });
        }
        record.job_status = JobStatus::Running;
        record.next_fire_time = next_fire_ts;
        Ok(UpdateOutcome::Applied)
    }

    fn release(&self, id: &JobId) -> Result<UpdateOutcome, StoreError> {
        let mut inner = self.inner.lock();
        let record = inner
            .table
            .get_mut(id.as_str())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if record.job_status != JobStatus::Running {
            return Ok(UpdateOutcome::Lost { current: record.job_status });
        }
        record.job_status = JobStatus::Ready;
        Ok(UpdateOutcome::Applied)
    }

    fn put(&self, record: JobRecord) -> Result<(), StoreError> {
        self.inner.lock().table.insert(record.job_id.to_string(), record);
        Ok(())
    }

    fn get(&self, id: &JobId) -> Result<Option<JobRecord>, StoreError> {
        Ok(self.inner.lock().table.get(id.as_str()).cloned())
    }

    fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        Ok(self.inner.lock().table.values().cloned().collect())
    }

    fn remove(&self, id: &JobId) -> Result<bool, StoreError> {
        Ok(self.inner.lock().table.remove(id.as_str()).is_some())
    }
}
