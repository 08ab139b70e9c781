// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tik-runner: the job worker invoked by the dispatcher.
//!
//! The bundled job kind is a transfer: fetch `sourceUrl` and write the
//! bytes under `targetLocation` below a configured root directory. The
//! runner is deliberately tolerant of being invoked with nothing to do;
//! a missing job id or detail is a clean no-op, not an error.

mod error;
mod fetch;
mod runner;
mod sink;

pub use error::{FetchError, TransferError};
#[cfg(any(test, feature = "test-support"))]
pub use fetch::FakeFetcher;
pub use fetch::{Fetcher, HttpFetcher};
pub use runner::{RunOutcome, Runner};
pub use sink::FsSink;
