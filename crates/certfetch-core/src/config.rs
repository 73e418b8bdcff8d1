use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http::CurlTransport;

/// Subdirectory of the user's documents (or home) folder used when no destination is configured.
pub const DEFAULT_DESTINATION_DIR: &str = "Zertifikate";

/// Global configuration loaded from `~/.config/certfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertfetchConfig {
    /// Directory certificates are saved to; `None` means `default_destination()`.
    #[serde(default)]
    pub destination: Option<PathBuf>,
    /// Ordered list of certificate URLs to fetch.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Seconds allowed for the TCP/TLS connect phase.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request, including the body.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for CertfetchConfig {
    fn default() -> Self {
        Self {
            destination: None,
            sources: vec![
                "https://example.com/certificates/cert1.pdf".to_string(),
                "https://example.org/privacy/cert2.pdf".to_string(),
            ],
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CertfetchConfig {
    /// Configured destination, or the default under the user's documents/home.
    pub fn destination_dir(&self) -> PathBuf {
        self.destination.clone().unwrap_or_else(default_destination)
    }

    /// Curl transport with this config's timeouts. Zero is clamped to one second
    /// so a request can never wait indefinitely.
    pub fn transport(&self) -> CurlTransport {
        CurlTransport::new(
            Duration::from_secs(self.connect_timeout_secs.max(1)),
            Duration::from_secs(self.timeout_secs.max(1)),
        )
    }
}

/// `<Documents>/Zertifikate`, falling back to `<home>/Zertifikate`, then `./Zertifikate`.
pub fn default_destination() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DESTINATION_DIR)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("certfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CertfetchConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<CertfetchConfig> {
    if !path.exists() {
        let default_cfg = CertfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: CertfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
