//! `certfetch fetch [URL...]` – download sources and save the PDFs.

use anyhow::{Context, Result};
use certfetch_core::config::CertfetchConfig;
use certfetch_core::{fetch_all, CurlTransport, Summary};
use std::path::PathBuf;

/// Exit code for `--fail-on-error` when at least one source failed.
pub const EXIT_SOURCE_FAILED: i32 = 2;

#[derive(Debug, Clone, Default)]
pub struct FetchArgs {
    pub urls: Vec<String>,
    pub dest: Option<PathBuf>,
    pub timeout: Option<u64>,
    pub fail_on_error: bool,
}

/// Sources, destination and transport after applying CLI overrides to the config.
#[derive(Debug, Clone)]
pub(crate) struct FetchPlan {
    pub sources: Vec<String>,
    pub destination: PathBuf,
    pub transport: CurlTransport,
}

impl FetchPlan {
    pub(crate) fn resolve(cfg: &CertfetchConfig, args: &FetchArgs) -> Self {
        let sources = if args.urls.is_empty() {
            cfg.sources.clone()
        } else {
            args.urls.clone()
        };
        let destination = args.dest.clone().unwrap_or_else(|| cfg.destination_dir());
        let mut cfg = cfg.clone();
        if let Some(secs) = args.timeout {
            cfg.timeout_secs = secs;
        }
        Self {
            sources,
            destination,
            transport: cfg.transport(),
        }
    }
}

pub async fn run_fetch(cfg: &CertfetchConfig, args: FetchArgs) -> Result<i32> {
    let FetchPlan {
        sources,
        destination,
        transport,
    } = FetchPlan::resolve(cfg, &args);

    if sources.is_empty() {
        tracing::info!("no sources configured");
    }

    // curl is blocking; keep it off the async worker threads.
    let outcomes = tokio::task::spawn_blocking(move || fetch_all(&sources, &destination, &transport))
        .await
        .context("fetch task panicked")??;

    for outcome in &outcomes {
        println!("{outcome}");
    }

    let summary = Summary::from_outcomes(&outcomes);
    tracing::info!(
        saved = summary.saved,
        skipped = summary.skipped,
        failed = summary.failed,
        "fetch run completed"
    );

    if args.fail_on_error && summary.failed > 0 {
        Ok(EXIT_SOURCE_FAILED)
    } else {
        Ok(0)
    }
}
