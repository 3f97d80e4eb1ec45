use crate::constants::DEFAULT_CONFIG_PATH;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_port: u16,
    pub listen_address: String,
    /// Address the EPSV data listeners bind to. Empty means "discover the
    /// host address at startup".
    pub pasv_address: String,
    /// File the recorded retrieval paths are appended to. None disables
    /// persistence.
    pub capture_log: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: 2121,
            listen_address: String::from("0.0.0.0"),
            pasv_address: String::new(),
            capture_log: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file.
    ///
    /// An empty path means "use the default location"; if nothing exists
    /// there the built-in defaults apply. An explicitly given path that
    /// cannot be read or parsed is an error.
    pub fn load(path: &str) -> Result<Config> {
        let path = if path.is_empty() {
            if !Path::new(DEFAULT_CONFIG_PATH).exists() {
                return Ok(Config::default());
            }
            DEFAULT_CONFIG_PATH
        } else {
            path
        };

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        let config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path))?;
        Ok(config)
    }
}
