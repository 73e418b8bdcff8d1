//! CLI for certfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use certfetch_core::config;
use std::path::PathBuf;

use commands::{run_config, run_fetch, run_list, FetchArgs};

/// Top-level CLI for certfetch.
#[derive(Debug, Parser)]
#[command(name = "certfetch")]
#[command(about = "Download PDF certificates into a local directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every source and save the ones served as PDF.
    Fetch {
        /// URLs to fetch instead of the configured `sources`.
        urls: Vec<String>,

        /// Save into this directory instead of the configured destination.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,

        /// Total per-request timeout in seconds (overrides `timeout_secs`).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Exit with status 2 if any source failed.
        #[arg(long)]
        fail_on_error: bool,
    },

    /// List saved certificates with their SHA-256.
    List {
        /// Directory to list instead of the configured destination.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    /// Parses arguments, loads config and runs the command. Returns the exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                urls,
                dest,
                timeout,
                fail_on_error,
            } => {
                let args = FetchArgs {
                    urls,
                    dest,
                    timeout,
                    fail_on_error,
                };
                run_fetch(&cfg, args).await
            }
            CliCommand::List { dest } => {
                let dir = dest.unwrap_or_else(|| cfg.destination_dir());
                run_list(&dir).await?;
                Ok(0)
            }
            CliCommand::Config => {
                run_config(&cfg)?;
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests;
