//! XDG Base Directory Support
//!
//! Resolves where Kotoba looks for its config file and its
//! dictionary database on Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for Kotoba
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve both directories
    ///
    /// Each one comes from its `KOTOBA_*_DIR` variable, else
    /// `$XDG_*_HOME/kotoba`, else the XDG default under the home dir.
    pub fn new() -> Self {
        Self {
            config_dir: resolve_dir("KOTOBA_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: resolve_dir("KOTOBA_DATA_DIR", "XDG_DATA_HOME", &[".local", "share"]),
        }
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // KOTOBA_CONFIG_FILE is an explicit override
        if let Ok(file) = env::var("KOTOBA_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Get the default dictionary database path
    pub fn database_file(&self) -> PathBuf {
        self.data_dir.join("dictionary.db")
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::info!("XDG directories resolved:");
        tracing::info!("  Config: {:?}", self.config_dir);
        tracing::info!("  Data: {:?}", self.data_dir);
        tracing::info!("  Config file: {:?}", self.config_file());
        tracing::info!("  Database: {:?}", self.database_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_dir(override_var: &str, xdg_var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(dir) = env::var(override_var) {
        return PathBuf::from(dir);
    }

    let base = match env::var(xdg_var) {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => home_default.iter().fold(
            dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            |path, segment| path.join(segment),
        ),
    };
    base.join("kotoba")
}
