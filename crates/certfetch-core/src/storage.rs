//! Destination directory and payload writes.
//!
//! Payloads go to `<name>.part` first and are renamed over the final path,
//! so an interrupted write never leaves a truncated certificate behind.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Creates `dir` and any missing parents. No-op if it already exists.
pub fn ensure_destination(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create destination directory {}", dir.display()))
}

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `data` to `dir/filename`, replacing any existing file of that name.
pub fn write_payload(dir: &Path, filename: &str, data: &[u8]) -> io::Result<PathBuf> {
    let final_path = dir.join(filename);
    let tmp = temp_path(&final_path);
    if let Err(e) = fs::write(&tmp, data).and_then(|()| fs::rename(&tmp, &final_path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(final_path)
}
