//! Configuration file loading
//!
//! Handles loading configuration from TOML files.

use crate::config::Config;
use crate::error::ConfigError;

use std::io;
use std::path::{Path, PathBuf};

/// Result of searching the default locations
#[derive(Debug, Default)]
pub struct DefaultLoad {
    /// Configuration from the highest-precedence readable file
    pub config: Option<Config>,
    /// Files that exist but failed to load, highest precedence first
    pub skipped: Vec<(PathBuf, ConfigError)>,
}

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::Read {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Later paths take precedence over earlier ones.
    pub fn load_default() -> Option<Config> {
        let loaded = Self::load_first(&Self::default_paths());
        for (path, e) in &loaded.skipped {
            log::warn!("Ignoring {}: {}", path.display(), e);
        }
        loaded.config
    }

    /// Load the last existing, valid file of `paths`
    pub fn load_first(paths: &[PathBuf]) -> DefaultLoad {
        let mut loaded = DefaultLoad::default();

        for path in paths.iter().rev() {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    loaded.config = Some(config);
                    break;
                }
                Err(e) => loaded.skipped.push((path.clone(), e)),
            }
        }

        loaded
    }

    /// Get default configuration file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // System-wide config
        paths.push(PathBuf::from("/etc/showgpu/config.toml"));

        // User config
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("showgpu/config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from("showgpu.toml"));
        paths.push(PathBuf::from(".showgpu.toml"));

        paths
    }
}
