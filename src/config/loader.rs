//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use crate::platforms::FolderMap;
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    /// Extra or replacement platform folder tokens, keyed by platform name.
    #[serde(default)]
    pub folders: BTreeMap<String, String>,
}

/// General options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OptionsConfig {
    /// Layouts to load when none are named on the command line.
    #[serde(default)]
    pub default_platforms: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Config(format!(
                    "Cannot read configuration file {}: {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        tracing::debug!(
            "Loaded configuration from {} ({} folder overrides)",
            path.display(),
            config.folders.len()
        );
        Ok(config)
    }

    /// Location of the per-user configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rom-library-organizer")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the explicit file if given, else the per-user file if it exists,
    /// else fall back to defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Build the folder map: built-in entries plus configured overrides.
    pub fn folder_map(&self) -> FolderMap {
        FolderMap::with_overrides(&self.folders)
    }
}
