//! SHA-256 digests of certificate payloads.
//!
//! The fetcher logs the digest of every saved body; `certfetch list`
//! recomputes it from disk so the two can be compared.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Lowercase hex SHA-256 of an in-memory payload.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Lowercase hex SHA-256 of a file, streamed through the hasher.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut f, &mut hasher).with_context(|| format!("read {}", path.display()))?;
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn empty_payload() {
        assert_eq!(sha256_hex(b""), EMPTY);
        let f = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(sha256_path(f.path()).unwrap(), EMPTY);
    }

    #[test]
    fn file_digest_matches_payload_digest() {
        let dir = tempfile::tempdir().unwrap();
        let body: Vec<u8> = b"%PDF-1.4\n".iter().copied().cycle().take(200 * 1024).collect();
        let path = dir.path().join("cert.pdf");
        std::fs::write(&path, &body).unwrap();
        assert_eq!(sha256_path(&path).unwrap(), sha256_hex(&body));
        assert_eq!(
            sha256_hex(b"hello\n"),
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
    }

    #[test]
    fn missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sha256_path(&dir.path().join("absent.pdf")).is_err());
    }
}
