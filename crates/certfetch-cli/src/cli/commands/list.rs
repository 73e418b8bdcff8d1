//! `certfetch list` – show saved certificates and their SHA-256.

use anyhow::{Context, Result};
use certfetch_core::checksum;
use std::path::{Path, PathBuf};

/// `*.pdf` files directly inside `dir`, sorted by name. Missing dir means none.
pub(crate) fn saved_certificates(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("read {}", dir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "pdf"))
        .collect();
    files.sort();
    Ok(files)
}

pub async fn run_list(dir: &Path) -> Result<()> {
    let files = saved_certificates(dir)?;
    if files.is_empty() {
        println!("No certificates in {}.", dir.display());
        return Ok(());
    }
    for path in files {
        let digest = checksum::sha256_path(&path)?;
        println!("{}  {}", digest, path.display());
    }
    Ok(())
}
