use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::preset::PresetStore;
use crate::units::LinearUnit;

/// Looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "quader.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuaderConfig {
    // Unit for input without an explicit unit and for displayed results
    #[serde(default)]
    pub default_unit: LinearUnit,

    // Overrides the per-user preset file location
    #[serde(default)]
    pub preset_file: Option<PathBuf>,

    // Decimal places in text output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    3
}

impl Default for QuaderConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl QuaderConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: QuaderConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Explicit path if given, else `quader.toml` in the working directory if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            Self::load_from_file(local)
        } else {
            Ok(Self::empty())
        }
    }

    pub fn empty() -> Self {
        Self {
            default_unit: LinearUnit::default(),
            preset_file: None,
            precision: default_precision(),
        }
    }

    pub fn preset_store(&self) -> PresetStore {
        match &self.preset_file {
            Some(path) => PresetStore::new(path),
            None => PresetStore::at_default_location(),
        }
    }
}
