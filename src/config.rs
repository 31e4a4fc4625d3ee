//! Application configuration stored as JSON in the user's config directory.
//!
//! A missing file means defaults. A file that can't be read or parsed is
//! logged and replaced by defaults, so a broken config never stops the app.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::play::DEFAULT_PLAY_BASE_URL;
use crate::domain::practice::START;

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the config location
pub const CONFIG_ENV: &str = "CHESS_ACADEMY_CONFIG";

pub const DEFAULT_PLAYBACK_INTERVAL_MS: u64 = 1500;
pub const MIN_PLAYBACK_INTERVAL_MS: u64 = 250;
pub const MAX_PLAYBACK_INTERVAL_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write config at {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeMode,
    /// Delay between automatic demonstration steps, in milliseconds
    pub playback_interval_ms: u64,
    /// Base URL of the hosted game
    pub play_base_url: String,
    /// Position for the free practice board; `"start"` or a FEN string
    pub practice_fen: String,
    /// Tracing filter directive, used when `RUST_LOG` is not set
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            playback_interval_ms: DEFAULT_PLAYBACK_INTERVAL_MS,
            play_base_url: DEFAULT_PLAY_BASE_URL.to_string(),
            practice_fen: START.to_string(),
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Resolve the config file location.
    ///
    /// `$CHESS_ACADEMY_CONFIG` wins, then the platform config directory, then
    /// `config.json` in the working directory.
    pub fn path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        match ProjectDirs::from("org", "chess-academy", "ChessAcademy") {
            Some(dirs) => dirs.config_dir().join(CONFIG_FILENAME),
            None => PathBuf::from(CONFIG_FILENAME),
        }
    }

    /// Read the config at `path`. `Ok(None)` if there is no file.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Some(config.normalized()))
    }

    /// Read the config, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        Self::or_default(path, Self::read(path))
    }

    /// Log the outcome of [`AppConfig::read`] and settle on a config
    pub fn or_default(path: &Path, read: Result<Option<Self>, ConfigError>) -> Self {
        match read {
            Ok(Some(config)) => {
                info!(?path, "loaded config");
                config
            }
            Ok(None) => {
                info!(?path, "no config file, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(error = %err, "using default config");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(?path, "saved config");
        Ok(())
    }

    /// Save, logging instead of returning the error
    pub fn save_or_log(&self, path: &Path) {
        if let Err(err) = self.save(path) {
            error!(error = %err, "config not saved");
        }
    }

    /// Clamp the interval into its allowed range and trim the play URL
    pub fn normalized(mut self) -> Self {
        self.playback_interval_ms = self
            .playback_interval_ms
            .clamp(MIN_PLAYBACK_INTERVAL_MS, MAX_PLAYBACK_INTERVAL_MS);
        let trimmed = self.play_base_url.trim().trim_end_matches('/');
        self.play_base_url = if trimmed.is_empty() {
            DEFAULT_PLAY_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }

    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }

    pub fn json_schema() -> Schema {
        schema_for!(AppConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("chess-academy-{}-{name}", std::process::id()))
            .join(CONFIG_FILENAME)
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.playback_interval_ms, DEFAULT_PLAYBACK_INTERVAL_MS);
        assert_eq!(config.play_base_url, DEFAULT_PLAY_BASE_URL);
        assert_eq!(config.practice_fen, "start");
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "playback_interval_ms": 900, "volume": 3 }"#).unwrap();
        assert_eq!(config.playback_interval_ms, 900);
    }

    #[test]
    fn test_normalized_clamps_and_trims() {
        let config = AppConfig {
            playback_interval_ms: 10,
            play_base_url: "http://localhost:3000/".to_string(),
            ..AppConfig::default()
        }
        .normalized();
        assert_eq!(config.playback_interval_ms, MIN_PLAYBACK_INTERVAL_MS);
        assert_eq!(config.play_base_url, "http://localhost:3000");

        let slow = AppConfig {
            playback_interval_ms: 60_000,
            play_base_url: "  ".to_string(),
            ..AppConfig::default()
        }
        .normalized();
        assert_eq!(slow.playback_interval(), Duration::from_millis(MAX_PLAYBACK_INTERVAL_MS));
        assert_eq!(slow.play_base_url, DEFAULT_PLAY_BASE_URL);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let path = temp_path("missing");
        assert!(AppConfig::read(&path).unwrap().is_none());
        assert_eq!(AppConfig::load(&path), AppConfig::default());
    }

    #[test]
    fn test_broken_file_falls_back() {
        let path = temp_path("broken");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::read(&path), Err(ConfigError::Parse { .. })));
        assert_eq!(AppConfig::load(&path), AppConfig::default());
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved");
        let config = AppConfig {
            theme: ThemeMode::Dark,
            playback_interval_ms: 2000,
            ..AppConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path), config);
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_schema_lists_fields() {
        let schema = serde_json::to_value(AppConfig::json_schema()).unwrap();
        let properties = &schema["properties"];
        for field in ["theme", "playback_interval_ms", "play_base_url", "practice_fen", "log_filter"] {
            assert!(properties.get(field).is_some(), "{field}");
        }
    }
}
