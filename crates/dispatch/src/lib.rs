// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tik-dispatch: the dispatch-and-reschedule cycle.
//!
//! On each tick the dispatcher selects due jobs from the table, validates
//! their cron expressions, hands each one to the runner (fire-and-forget),
//! computes the next occurrence, and conditionally persists
//! `RUNNING` + the new fire time. Each job is processed independently; one
//! job's failure never aborts the rest of the cycle.

mod dispatcher;
mod error;
mod invoker;
mod report;

pub use dispatcher::Dispatcher;
pub use error::{CycleError, DispatchError, InvokeError};
#[cfg(any(test, feature = "test-support"))]
pub use invoker::FakeInvoker;
pub use invoker::{InvokePayload, ProcessInvoker, RunnerInvoker};
pub use report::CycleReport;
