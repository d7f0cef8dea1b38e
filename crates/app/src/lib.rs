//! Application layer for the `talentfit` command-line tool.
//!
//! Loads datasets, resolves configuration (CLI > environment > config file),
//! and drives the recommendation engine for the `recommend`, `activities`,
//! `validate` and `approve` commands. The main entry point is [`run`].
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`, e.g.
//! `RUST_LOG=talentfit=debug`.

pub mod cli;
mod commands;
pub mod config;
pub mod dataset;
pub mod options;
pub mod shortlist;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

pub use dataset::{Dataset, DatasetError, DatasetFormat};
pub use shortlist::{ActivityShortlist, ShortlistBatch};

/// Parse the command line and run the selected command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    config::apply_config_to_env();

    let cli = Cli::parse();
    match cli.command {
        Commands::Recommend {
            activity,
            all,
            dataset,
            scoring,
            format,
        } => commands::handle_recommend_command(activity, all, dataset, scoring, format),
        Commands::Activities { dataset, format } => {
            commands::handle_activities_command(dataset, format)
        }
        Commands::Validate { dataset, format } => {
            commands::handle_validate_command(dataset, format)
        }
        Commands::Approve {
            activity,
            out,
            dataset,
            scoring,
        } => commands::handle_approve_command(activity, out, dataset, scoring),
    }
}
