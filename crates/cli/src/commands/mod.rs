// SPDX-License-Identifier: MIT

pub mod jobs;
pub mod run;
pub mod serve;
pub mod tick;
