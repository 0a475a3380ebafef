//! Host configuration parsed from environment variables.
//!
//! Leptos build/serve options come from `[[workspace.metadata.leptos]]` via
//! `get_configuration`; this module only covers what the hub adds on top.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub port: u16,
    /// Backend base URL published to the browser; empty means same-origin.
    pub backend_url: String,
    /// Override for the directory holding `/pkg` assets.
    pub site_root: Option<PathBuf>,
}

impl HubConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `HUB_BACKEND_URL`: default empty (same-origin API)
    /// - `HUB_SITE_ROOT`: default Leptos `site_root`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`HubConfig::from_env`] with an injectable variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(var("PORT").as_deref())?;
        let backend_url = var("HUB_BACKEND_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .unwrap_or_default();
        let site_root = var("HUB_SITE_ROOT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self { port, backend_url, site_root })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| ConfigError::InvalidPort(value.to_owned())),
    }
}
