use std::path::PathBuf;

use anyhow::{bail, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub static_dir: Option<PathBuf>,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let data_path = std::env::var("DAYLOG_DATA_PATH")
            .unwrap_or_else(|_| "data.json".to_string())
            .into();
        let static_dir = std::env::var("DAYLOG_STATIC_DIR").ok().map(PathBuf::from);
        let bind_addr =
            std::env::var("DAYLOG_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // Tiny sanity check (fail fast, fail loud)
        if !bind_addr.contains(':') {
            bail!("DAYLOG_BIND_ADDR must look like host:port");
        }

        Ok(Self {
            data_path,
            static_dir,
            bind_addr,
        })
    }
}
