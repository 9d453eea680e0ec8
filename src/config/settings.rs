//! User settings for aispend
//!
//! Manages display preferences. Tracked service records are deliberately
//! never persisted; only these preferences live on disk.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for aispend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether the dashboard starts with the example service records
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,

    /// TUI tick rate in milliseconds (drives notification expiry)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_seed_examples() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            seed_examples: default_seed_examples(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert!(settings.seed_examples);
        assert_eq!(settings.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_without_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.seed_examples = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.seed_examples);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.currency_symbol, deserialized.currency_symbol);
        assert_eq!(settings.tick_rate_ms, deserialized.tick_rate_ms);
    }
}
