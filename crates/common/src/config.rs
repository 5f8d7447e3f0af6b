//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Turn detection defaults.
    #[serde(default)]
    pub turns: TurnDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default turn generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnDefaults {
    /// Turn detector variant: "simple" or "reversal".
    pub detector: String,

    /// Whether traces carry integer device coordinates (otherwise reals).
    pub integer_coordinates: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "freehand=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for TurnDefaults {
    fn default() -> Self {
        Self {
            detector: "simple".to_string(),
            integer_coordinates: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to `config_path`, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("freehand").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.turns.detector, "simple");
        assert!(config.turns.integer_coordinates);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"turns":{"detector":"reversal","integer_coordinates":false}}"#)
                .unwrap();
        assert_eq!(config.turns.detector, "reversal");
        assert!(!config.turns.integer_coordinates);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("freehand_test_config");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("config.json");

        let mut config = AppConfig::default();
        config.turns.detector = "reversal".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.turns.detector, "reversal");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unparsable_config_uses_defaults() {
        let dir = std::env::temp_dir().join("freehand_test_bad_config");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.turns.detector, "simple");

        std::fs::remove_dir_all(&dir).ok();
    }
}
