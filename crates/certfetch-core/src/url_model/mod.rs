//! Filename derivation for saved certificates.
//!
//! The local name is the final path segment of the source URL, sanitized for
//! the filesystem. Two sources sharing a final segment map to the same file;
//! the later one wins.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;

/// Used when the URL has no usable final segment (e.g. `https://host/dir/`).
pub const DEFAULT_FILENAME: &str = "download.pdf";

/// Derives the filename a source URL is saved under.
///
/// # Examples
///
/// - `derive_filename("https://example.com/certificates/cert1.pdf")` → `"cert1.pdf"`
/// - `derive_filename("https://example.com/")` → `"download.pdf"`
pub fn derive_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(s) => s,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
