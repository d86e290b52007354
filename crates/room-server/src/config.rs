use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

use room_api::routes::RouterConfig;

/// Process configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub prefix: String,
    /// Enables the voice clip pass-through.
    pub dev_mode: bool,
    pub voice_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = get("ROOM_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = get("ROOM_PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .context("ROOM_PORT must be a port number")?;
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", host, port))?;

        let db_path = get("ROOM_DB_PATH").unwrap_or_else(|| "room.db".into()).into();
        let prefix = get("ROOM_PATH_PREFIX").unwrap_or_else(|| "/url1".into());
        let dev_mode = get("ROOM_DEV_MODE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let voice_dir = get("ROOM_VOICE_DIR").unwrap_or_else(|| "./assets/voice".into()).into();

        Ok(Self {
            addr,
            db_path,
            prefix,
            dev_mode,
            voice_dir,
        })
    }

    pub fn router_config(&self) -> RouterConfig {
        RouterConfig {
            prefix: self.prefix.clone(),
            voice_dir: self.dev_mode.then(|| self.voice_dir.clone()),
        }
    }
}
