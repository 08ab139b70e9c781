// SPDX-License-Identifier: MIT

//! `tik jobs`: job table management.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use tik_core::{Clock, JobDetail, JobId, JobRecord, Schedule, SystemClock};
use tik_store::{FileJobStore, JobStore, UpdateOutcome};

use crate::env;
use crate::exit_error::ExitError;

#[derive(Subcommand)]
pub enum JobsCommand {
    /// Add or replace a job
    Add(AddArgs),
    /// List all jobs
    List,
    /// Print one job record as JSON
    Show { job_id: String },
    /// Return a RUNNING job to READY
    Release { job_id: String },
    /// Delete a job
    Remove { job_id: String },
}

#[derive(Args)]
pub struct AddArgs {
    /// Job id (generated when omitted)
    #[arg(long)]
    pub id: Option<String>,
    /// Cron expression: minute hour day-of-month month day-of-week,
    /// optionally preceded by a seconds field
    #[arg(long)]
    pub schedule: String,
    /// Opaque job detail JSON passed through to the runner
    #[arg(long, default_value = "{}")]
    pub detail: String,
    /// First fire time as a Unix timestamp (defaults to the schedule's
    /// next occurrence)
    #[arg(long)]
    pub next_fire: Option<i64>,
}

pub fn run(command: JobsCommand) -> Result<()> {
    let store = FileJobStore::new(env::jobs_path()?);
    match command {
        JobsCommand::Add(args) => add(&store, args),
        JobsCommand::List => list(&store),
        JobsCommand::Show { job_id } => show(&store, &job_id),
        JobsCommand::Release { job_id } => release(&store, &job_id),
        JobsCommand::Remove { job_id } => remove(&store, &job_id),
    }
}

fn add(store: &FileJobStore, args: AddArgs) -> Result<()> {
    // Reject bad expressions at the door instead of letting the record
    // rot in the table as a per-tick skip.
    let schedule = Schedule::parse(&args.schedule)?;
    let detail: JobDetail =
        serde_json::from_str::<serde_json::Value>(&args.detail).context("parsing --detail")?.into();

    let job_id = match args.id {
        Some(id) => JobId::from(id),
        None => JobId::new(),
    };
    let next_fire = match args.next_fire {
        Some(ts) => ts,
        None => schedule
            .next_after(SystemClock.now_utc())
            .ok_or_else(|| anyhow!("schedule has no next occurrence"))?
            .timestamp(),
    };

    store.put(JobRecord::new(job_id.clone(), args.schedule, detail, next_fire))?;
    println!("added {job_id} next_fire={next_fire}");
    Ok(())
}

fn list(store: &FileJobStore) -> Result<()> {
    for record in store.list()? {
        let next = chrono::DateTime::from_timestamp(record.next_fire_time, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| record.next_fire_time.to_string());
        println!(
            "{}\t{}\t{}\t{}",
            record.job_id, record.job_status, record.schedule_expression, next
        );
    }
    Ok(())
}

fn show(store: &FileJobStore, job_id: &str) -> Result<()> {
    match store.get(&JobId::from(job_id))? {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        None => Err(ExitError::new(1, format!("no such job: {job_id}")).into()),
    }
}

fn release(store: &FileJobStore, job_id: &str) -> Result<()> {
    match store.release(&JobId::from(job_id))? {
        UpdateOutcome::Applied => {
            println!("released {job_id}");
            Ok(())
        }
        UpdateOutcome::Lost { current } => {
            bail!("job {job_id} is {current}, not RUNNING")
        }
    }
}

fn remove(store: &FileJobStore, job_id: &str) -> Result<()> {
    if store.remove(&JobId::from(job_id))? {
        println!("removed {job_id}");
        Ok(())
    } else {
        Err(ExitError::new(1, format!("no such job: {job_id}")).into())
    }
}
