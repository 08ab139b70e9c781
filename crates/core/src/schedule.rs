// SPDX-License-Identifier: MIT

//! Cron expression validation and next-occurrence computation.
//!
//! Accepts the standard five-field form (minute hour day-of-month month
//! day-of-week) as well as the six-field form with a leading seconds field.
//! Five-field expressions are normalized by prepending a `0` seconds field
//! before parsing, so `*/15 * * * *` fires at second zero of each matching
//! minute.

use chrono::{DateTime, Utc};
use cron::Schedule as CronSchedule;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("cron expression must have 5 or 6 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid cron expression '{expression}': {source}")]
    Invalid {
        expression: String,
        #[source]
        source: cron::error::Error,
    },
}

/// A validated cron schedule.
///
/// Parsing is the validation gate the dispatcher relies on: an expression
/// that parses can always be asked for its next occurrence.
#[derive(Debug, Clone)]
pub struct Schedule {
    expression: String,
    inner: CronSchedule,
}

impl Schedule {
    /// Parse and validate a cron expression.
    ///
    /// Supports exact values, ranges (`MON-FRI`), steps (`*/15`), wildcards,
    /// and lists. Out-of-range field values (e.g. minute `99`) are rejected.
    pub fn parse(expression: &str) -> Result<Self, ScheduleError> {
        let expression = expression.trim();
        let fields = expression.split_whitespace().count();
        if !(5..=6).contains(&fields) {
            return Err(ScheduleError::FieldCount { found: fields });
        }
        let normalized = if fields == 5 {
            format!("0 {expression}")
        } else {
            expression.to_string()
        };
        let inner = CronSchedule::from_str(&normalized).map_err(|source| {
            ScheduleError::Invalid { expression: expression.to_string(), source }
        })?;
        Ok(Self { expression: expression.to_string(), inner })
    }

    /// Check whether an expression parses, without keeping the schedule.
    pub fn is_valid(expression: &str) -> bool {
        Self::parse(expression).is_ok()
    }

    /// The earliest occurrence strictly after `reference`.
    ///
    /// Pure: the same (expression, reference) pair always yields the same
    /// result. Returns `None` only for schedules with no future match.
    pub fn next_after(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.inner.after(&reference).next()
    }

    /// The original expression as given (unnormalized).
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expression)
    }
}

impl FromStr for Schedule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
