//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backing file for note records
    #[serde(default = "default_notes_file")]
    pub notes_file: PathBuf,

    /// Side file for error records
    #[serde(default = "default_error_log")]
    pub error_log: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
            error_log: default_error_log(),
        }
    }
}

fn default_notes_file() -> PathBuf {
    PathBuf::from("notes.txt")
}

fn default_error_log() -> PathBuf {
    PathBuf::from("error_log.txt")
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory for backup copies (default: alongside the notes file)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load config from default locations
    pub fn load() -> Result<Self> {
        // Try local config first, then global
        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        // Return default config
        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find jot.toml in the current directory
    pub fn find_local_config() -> Option<PathBuf> {
        let path = PathBuf::from("jot.toml");
        path.exists().then_some(path)
    }

    /// Get global config path (platform config dir)
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "jot")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
