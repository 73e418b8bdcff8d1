//! HTTP GET transport.
//!
//! `Transport` is the seam the fetcher talks to; `CurlTransport` is the
//! libcurl implementation used by the binary. Status classification is left
//! to the caller so non-2xx responses reach the fetcher intact.

mod parse;

pub use parse::{content_type, header_line};

use crate::error::FetchError;
use std::time::Duration;

/// Default connect timeout when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
/// Default total request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A completed HTTP exchange: final status, declared content type and full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    /// `Content-Type` of the final response (after redirects), if present.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a plain GET. Implementations return `Err` only for transport-level
/// failures; any status code the server sends comes back as `Ok`.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Blocking libcurl transport. One Easy handle per request.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }
}

impl Transport for CurlTransport {
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                headers.push(header_line(data));
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::trace!(url, status, bytes = body.len(), "GET finished");

        Ok(HttpResponse {
            status,
            content_type: content_type(&headers),
            body,
        })
    }
}
