// SPDX-License-Identifier: MIT

//! Runner error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to retrieve the source resource.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetching '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Source unavailable (used by fakes for failure injection).
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a transfer job.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("job detail missing '{0}'")]
    MissingField(&'static str),

    /// The target location is absolute or walks above the target root.
    #[error("target '{0}' escapes the target root")]
    TargetOutsideRoot(String),

    #[error("storing to '{path}': {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
