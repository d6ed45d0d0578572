use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    CONFIDENCE_THRESHOLD, DEFAULT_MAX_SUGGESTIONS, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
    SMOOTHING_WINDOW,
};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Tunables for the stabilization pipeline and suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerSettings {
    pub window_size: usize,
    pub confidence_threshold: usize,
    pub max_suggestions: usize,
}

impl Default for RecognizerSettings {
    fn default() -> Self {
        Self {
            window_size: SMOOTHING_WINDOW,
            confidence_threshold: CONFIDENCE_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl RecognizerSettings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Loads from the platform config directory, falling back to defaults
    /// when the file is absent or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window_size == 0 {
            return Err(SettingsError::Invalid(
                "window_size must be at least 1".to_string(),
            ));
        }
        if self.confidence_threshold == 0 || self.confidence_threshold > self.window_size {
            return Err(SettingsError::Invalid(format!(
                "confidence_threshold must be between 1 and {}, got {}",
                self.window_size, self.confidence_threshold
            )));
        }
        if self.max_suggestions == 0 {
            return Err(SettingsError::Invalid(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
