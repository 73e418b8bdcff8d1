//! `certfetch config` – print config location and effective values.

use anyhow::Result;
use certfetch_core::config::{self, CertfetchConfig};

pub fn run_config(cfg: &CertfetchConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    println!("# destination: {}", cfg.destination_dir().display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
