//! Certificate fetcher: download each source and keep the PDFs.
//!
//! Sources are handled strictly one after another. A failing source never
//! aborts the run; only a destination directory that cannot be created does.

use anyhow::Result;
use std::path::Path;

use crate::checksum::sha256_hex;
use crate::error::FetchError;
use crate::http::{HttpResponse, Transport};
use crate::outcome::{Outcome, NOT_A_PDF};
use crate::storage;
use crate::url_model::derive_filename;

/// Media type a response must declare to be saved.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// True if the declared content type contains `application/pdf` (case-sensitive).
pub fn is_pdf(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains(PDF_MEDIA_TYPE))
}

/// Fetches every source in order and returns one outcome per source.
///
/// Creates `destination` (and parents) first; that is the only fatal error.
pub fn fetch_all<T: Transport>(
    sources: &[String],
    destination: &Path,
    transport: &T,
) -> Result<Vec<Outcome>> {
    storage::ensure_destination(destination)?;
    tracing::debug!(
        destination = %destination.display(),
        sources = sources.len(),
        "fetch run started"
    );

    let outcomes = sources
        .iter()
        .map(|url| {
            let outcome = fetch_one(url, destination, transport);
            log_outcome(&outcome);
            outcome
        })
        .collect();

    Ok(outcomes)
}

fn fetch_one<T: Transport>(url: &str, destination: &Path, transport: &T) -> Outcome {
    match transport.get(url).and_then(|resp| persist(url, destination, resp)) {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_timeout() {
                tracing::debug!(url, "request timed out");
            }
            Outcome::Failed {
                url: url.to_string(),
                error: e.to_string(),
            }
        }
    }
}

fn persist(url: &str, destination: &Path, resp: HttpResponse) -> Result<Outcome, FetchError> {
    if !resp.is_success() {
        return Err(FetchError::Http(resp.status));
    }
    if !is_pdf(resp.content_type.as_deref()) {
        return Ok(Outcome::Skipped {
            url: url.to_string(),
            reason: NOT_A_PDF.to_string(),
        });
    }

    let filename = derive_filename(url);
    let path = storage::write_payload(destination, &filename, &resp.body)?;
    tracing::debug!(
        url,
        bytes = resp.body.len(),
        sha256 = %sha256_hex(&resp.body),
        "payload written"
    );
    Ok(Outcome::Saved {
        url: url.to_string(),
        path,
    })
}

fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Saved { url, path } => {
            tracing::info!(url = %url, path = %path.display(), "certificate saved")
        }
        Outcome::Skipped { url, reason } => tracing::debug!(url = %url, reason = %reason, "skipped"),
        Outcome::Failed { url, error } => tracing::warn!(url = %url, error = %error, "fetch failed"),
    }
}
