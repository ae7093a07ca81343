//! Configuration loading for Rofive.
//! Reads rofive.toml from the current directory or the path in the
//! ROFIVE_CONFIG env var; missing file means defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Upper bound on uploaded batch rows; the core itself is unbounded.
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

fn default_max_rows() -> usize { 10_000 }

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_rows: default_max_rows() }
    }
}

impl Config {
    /// Load from ROFIVE_CONFIG or ./rofive.toml; defaults when absent.
    pub fn load() -> anyhow::Result<Config> {
        let path = std::env::var("ROFIVE_CONFIG").unwrap_or_else(|_| "rofive.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unconfigured() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.batch.max_rows, 10_000);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.batch.max_rows, 10_000);
    }

    #[test]
    fn missing_file_is_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/rofive.toml")).unwrap();
        assert_eq!(config.server.port, 3001);
    }
}
