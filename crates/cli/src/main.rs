// SPDX-License-Identifier: MIT

//! `tik` binary entrypoint.

mod commands;
mod env;
mod exit_error;

use clap::{Parser, Subcommand};

use crate::exit_error::ExitError;

#[derive(Parser)]
#[command(name = "tik", version, about = "Cron-style job dispatcher")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one dispatch cycle and exit
    Tick(commands::tick::TickArgs),
    /// Run dispatch cycles on an interval until interrupted
    Serve,
    /// Execute one job as the runner (invoked by the dispatcher)
    Run(commands::run::RunArgs),
    /// Manage the job table
    Jobs {
        #[command(subcommand)]
        command: commands::jobs::JobsCommand,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Tick(args) => commands::tick::run(args).await,
        Command::Serve => commands::serve::run().await,
        Command::Run(args) => commands::run::run(args).await,
        Command::Jobs { command } => commands::jobs::run(command),
    };

    if let Err(err) = result {
        let code = match err.downcast_ref::<ExitError>() {
            Some(exit) => exit.code,
            None => 1,
        };
        eprintln!("tik: {err:#}");
        std::process::exit(code);
    }
}
