// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tik-core: Core types for the tik job dispatcher

pub mod macros;

pub mod clock;
pub mod id;
pub mod job;
pub mod schedule;

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use clock::{Clock, SystemClock};
pub use id::JobId;
pub use job::{JobDetail, JobRecord, JobStatus};
pub use schedule::{Schedule, ScheduleError};
