// SPDX-License-Identifier: MIT

//! File-backed job table.
//!
//! The whole table lives in one JSON document keyed by job id. Every write
//! rewrites the document through a temp file and an atomic rename, so a
//! crash mid-write leaves the previous table intact. Fine for the job
//! counts this system targets; the trait boundary is where a real database
//! would slot in.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tik_core::{JobId, JobRecord, JobStatus};
use tracing::debug;

use crate::{JobStore, StoreError, UpdateOutcome};

pub struct FileJobStore {
    path: PathBuf,
}

type Table = BTreeMap<String, JobRecord>;

impl FileJobStore {
    /// Open a store at `path`. The file is created on first write; a
    /// missing file reads as an empty table.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Table, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Table::new()),
            Err(source) => return Err(StoreError::Read { path: self.path.clone(), source }),
        };
        serde_json::from_str(&raw)
            .map_err(|source| StoreError::Corrupt { path: self.path.clone(), source })
    }

    fn persist(&self, table: &Table) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write { path: self.path.clone(), source };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let raw = serde_json::to_string_pretty(table)
            .map_err(|source| StoreError::Corrupt { path: self.path.clone(), source })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, raw).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }

    /// Load-mutate-persist around a single record, enforcing a status
    /// precondition. The loser of a race sees `Lost`, not a silent
    /// overwrite.
    fn transition(
        &self,
        id: &JobId,
        expected: JobStatus,
        apply: impl FnOnce(&mut JobRecord),
    ) -> Result<UpdateOutcome, StoreError> {
        let mut table = self.load()?;
        let record = table
            .get_mut(id.as_str())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if record.job_status != expected {
            return Ok(UpdateOutcome::Lost { current: record.job_status });
        }
        apply(record);
        self.persist(&table)?;
        Ok(UpdateOutcome::Applied)
    }
}

impl JobStore for FileJobStore {
    fn due_jobs(&self, now_ts: i64) -> Result<Vec<JobRecord>, StoreError> {
        let table = self.load()?;
        let due: Vec<JobRecord> =
            table.into_values().filter(|r| r.is_due(now_ts)).collect();
        debug!(count = due.len(), now = now_ts, "due-job scan");
        Ok(due)
    }

    fn mark_dispatched(
        &self,
        id: &JobId,
        next_fire_ts: i64,
    ) -> Result<UpdateOutcome, StoreError> {
        self.transition(id, JobStatus::Ready, |record| {
            record.job_status = JobStatus::Running;
            record.next_fire_time = next_fire_ts;
        })
    }

    fn release(&self, id: &JobId) -> Result<UpdateOutcome, StoreError> {
        self.transition(id, JobStatus::Running, |record| {
            record.job_status = JobStatus::Ready;
        })
    }

    fn put(&self, record: JobRecord) -> Result<(), StoreError> {
        let mut table = self.load()?;
        table.insert(record.job_id.to_string(), record);
        self.persist(&table)
    }

    fn get(&self, id: &JobId) -> Result<Option<JobRecord>, StoreError> {
        Ok(self.load()?.remove(id.as_str()))
    }

    fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        Ok(self.load()?.into_values().collect())
    }

    fn remove(&self, id: &JobId) -> Result<bool, StoreError> {
        let mut table = self.load()?;
        let existed = table.remove(id.as_str()).is_some();
        if existed {
            self.persist(&table)?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
