//! Configuration Module
//! Persisted user settings for the labeling tool.

use crate::labeling::{ScoreError, ScoreRange};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "ERI_LABELER_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid score settings: {0}")]
    Score(#[from] ScoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelerConfig {
    pub labeler_name: String,
    /// Rewritten after every submission.
    pub output_path: PathBuf,
    /// Suggested name in the download dialog.
    pub download_file_name: String,
    pub score_min: i64,
    pub score_max: i64,
    pub default_score: i64,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            labeler_name: "Anonymous".to_string(),
            output_path: PathBuf::from("labeled_data.csv"),
            download_file_name: "labeled_results.csv".to_string(),
            score_min: 1,
            score_max: 7,
            default_score: 4,
        }
    }
}

impl LabelerConfig {
    pub fn score_range(&self) -> Result<ScoreRange, ScoreError> {
        ScoreRange::new(self.score_min, self.score_max)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.score_range()?;
        Ok(())
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but falls back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring config file");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// `$ERI_LABELER_CONFIG`, else `<config dir>/eri-labeler/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("eri-labeler").join("config.json"))
}
