// SPDX-License-Identifier: MIT

//! Job table error type.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading job table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing job table {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("job table {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no such job: {0}")]
    NotFound(String),

    /// Backend unavailable (used by fakes for failure injection).
    #[error("job table unavailable: {0}")]
    Unavailable(String),
}
