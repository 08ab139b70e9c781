// SPDX-License-Identifier: MIT

//! Filesystem target for transferred bytes.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::TransferError;

/// Writes transfer targets below a root directory.
///
/// Target locations are relative key-style paths (`bucket/file.csv`).
/// Absolute paths and `..` components are rejected so a job detail can
/// never write outside the root.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` at `location` under the root, creating intermediate
    /// directories. Returns the resolved path.
    pub fn store(&self, location: &str, bytes: &[u8]) -> Result<PathBuf, TransferError> {
        let rel = Path::new(location);
        let escapes = rel.is_absolute()
            || rel.components().any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if location.is_empty() || escapes {
            return Err(TransferError::TargetOutsideRoot(location.to_string()));
        }

        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| TransferError::Store {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, bytes)
            .map_err(|source| TransferError::Store { path: path.clone(), source })?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
