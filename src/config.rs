//! Engine configuration loaded from a JSON file

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::device::AudioConfig;
use crate::error::{Result, SoundError};

/// Directory name under the user's config/data dirs
pub const APP_DIR: &str = "odyssey";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Output device name, system default if unset
    pub output_device: Option<String>,
    pub audio: AudioConfig,
    /// Where the sound toggle is persisted
    pub settings_path: Option<PathBuf>,
    /// Default `env_logger` filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            output_device: None,
            audio: AudioConfig::default(),
            settings_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl SoundConfig {
    /// Location of the config file in the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("sound.json"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No sound config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SoundError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        serde_json::from_str(&content)
            .map_err(|e| SoundError::Config(format!("Failed to parse {:?}: {}", path, e)))
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!("{}", e);
            Self::default()
        })
    }

    /// Settings file to use: the configured one or `<config dir>/odyssey/settings.json`
    pub fn settings_file(&self) -> Option<PathBuf> {
        self.settings_path
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join("settings.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SoundConfig::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, SoundConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sound.json");
        fs::write(
            &path,
            r#"{"output_device": "Speakers", "audio": {"buffer_size": 256}}"#,
        )
        .unwrap();

        let config = SoundConfig::load(&path).unwrap();
        assert_eq!(config.output_device.as_deref(), Some("Speakers"));
        assert_eq!(config.audio.buffer_size, 256);
        assert_eq!(config.audio.sample_rate, 44100);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sound.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(SoundConfig::load(&path), Err(SoundError::Config(_))));
    }

    #[test]
    fn test_explicit_settings_path_wins() {
        let config = SoundConfig {
            settings_path: Some(PathBuf::from("/tmp/custom.json")),
            ..Default::default()
        };
        assert_eq!(config.settings_file(), Some(PathBuf::from("/tmp/custom.json")));
    }
}
