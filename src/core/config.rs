//! Configuration management for the Kotoba dictionary service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{KotobaError, Result};
use crate::core::search::MAX_RESULTS;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// SQLite dictionary database (opened read-only)
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum results per query, capped at 50
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Maximum query string length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Limits configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

// Placeholder replaced by the XDG data path in `load_with_xdg`
fn default_database_path() -> PathBuf {
    PathBuf::from("./dictionary.db")
}

fn default_max_results() -> usize {
    MAX_RESULTS
}

fn default_max_query_length() -> usize {
    500
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_sec: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| KotobaError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. KOTOBA_CONFIG env var
    /// 2. XDG config file (~/.config/kotoba/config.toml)
    /// 3. ./kotoba.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("KOTOBA_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("kotoba.toml").exists() {
                Self::from_file("kotoba.toml")?
            } else {
                Self::default()
            }
        };

        if config.storage.database_path == default_database_path() {
            config.storage.database_path = xdg.database_file();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("KOTOBA_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("KOTOBA_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(database) = env::var("KOTOBA_DATABASE") {
            self.storage.database_path = PathBuf::from(database);
        }

        if let Ok(max_results) = env::var("KOTOBA_MAX_RESULTS") {
            if let Ok(max) = max_results.parse() {
                self.search.max_results = max;
            }
        }
        if let Ok(max_query_len) = env::var("KOTOBA_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        if let Ok(timeout) = env::var("KOTOBA_REQUEST_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.limits.request_timeout_sec = t;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(KotobaError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.search.max_results == 0 {
            return Err(KotobaError::ConfigError(
                "Max results must be non-zero".to_string(),
            ));
        }

        if self.search.max_results > MAX_RESULTS {
            return Err(KotobaError::ConfigError(format!(
                "Max results cannot exceed {MAX_RESULTS}"
            )));
        }

        if self.search.max_query_length == 0 {
            return Err(KotobaError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.limits.request_timeout_sec == 0 {
            return Err(KotobaError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address string for the HTTP server
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}", self.bind_address());
        tracing::info!("  Database: {:?}", self.storage.database_path);
        tracing::info!("  Max results: {}", self.search.max_results);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Request timeout: {}s", self.limits.request_timeout_sec);
    }
}
