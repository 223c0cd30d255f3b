//! Server configuration from environment variables.

use std::path::PathBuf;

use date_quiz_core::export::DEFAULT_SPEAKER;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Vocabulary dataset (`{"items": [...]}`).
    pub data_path: PathBuf,
    /// Token to file mapping. Files are relative to `audio_dir`.
    pub manifest_path: PathBuf,
    /// Directory served under [`AUDIO_ROUTE`](crate::AUDIO_ROUTE).
    pub audio_dir: PathBuf,
    /// Persisted settings blob.
    pub settings_path: PathBuf,
    /// Speaker label written into the missing-audio export.
    pub speaker_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_path: PathBuf::from("data/date_game_data.json"),
            manifest_path: PathBuf::from("audio/base/manifest.json"),
            audio_dir: PathBuf::from("audio"),
            settings_path: PathBuf::from("data/settings.json"),
            speaker_label: DEFAULT_SPEAKER.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// Recognized vars (all optional):
    /// - HOST, PORT: listen address
    /// - DATA_PATH: vocabulary dataset
    /// - MANIFEST_PATH: audio manifest
    /// - AUDIO_DIR: directory holding the audio clips
    /// - SETTINGS_PATH: where settings are persisted
    /// - SPEAKER_LABEL: speaker label for the missing-audio export
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => defaults.port,
        };

        let path_var = |name: &str, default: PathBuf| {
            std::env::var(name).map(PathBuf::from).unwrap_or(default)
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,
            data_path: path_var("DATA_PATH", defaults.data_path),
            manifest_path: path_var("MANIFEST_PATH", defaults.manifest_path),
            audio_dir: path_var("AUDIO_DIR", defaults.audio_dir),
            settings_path: path_var("SETTINGS_PATH", defaults.settings_path),
            speaker_label: std::env::var("SPEAKER_LABEL").unwrap_or(defaults.speaker_label),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        assert_eq!(Config::default().addr(), "0.0.0.0:3000");
    }
}
