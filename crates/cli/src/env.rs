// SPDX-License-Identifier: MIT

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Resolve state directory: TIK_STATE_DIR > XDG_STATE_HOME/tik > ~/.local/state/tik
pub fn state_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TIK_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("tik"));
    }
    let home = std::env::var("HOME").context("HOME is not set; set TIK_STATE_DIR")?;
    Ok(PathBuf::from(home).join(".local/state/tik"))
}

/// Path of the persisted job table.
pub fn jobs_path() -> Result<PathBuf> {
    Ok(state_dir()?.join("jobs.json"))
}

/// Program the dispatcher spawns for each fired job.
pub fn runner_bin() -> Result<PathBuf> {
    match std::env::var("TIK_RUNNER_BIN") {
        Ok(bin) if !bin.is_empty() => Ok(PathBuf::from(bin)),
        _ => bail!("TIK_RUNNER_BIN is not set"),
    }
}

/// Dispatch interval for `tik serve` (default 60s, via `TIK_TICK_MS`).
pub fn tick_interval() -> Duration {
    std::env::var("TIK_TICK_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(60))
}

/// Root directory transfer targets are written under.
pub fn target_root() -> Result<PathBuf> {
    match std::env::var("TIK_TARGET_ROOT") {
        Ok(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => bail!("TIK_TARGET_ROOT is not set"),
    }
}

/// Runner payload delivered by the dispatcher, if any.
pub fn job_detail() -> Option<String> {
    std::env::var("JOB_DETAIL").ok().filter(|s| !s.is_empty())
}
