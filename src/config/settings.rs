//! User settings for coinbook
//!
//! Manages user preferences. Currently this is just the currency symbol used
//! by the display layer; the schema version field leaves room for migrations.

use serde::{Deserialize, Serialize};

use super::paths::CoinbookPaths;
use crate::error::CoinbookError;

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "¥".to_string()
}

/// User settings for coinbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prepended to amounts in terminal output
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from config.json, creating the file with defaults if it
    /// does not exist yet
    pub fn load_or_create(paths: &CoinbookPaths) -> Result<Self, CoinbookError> {
        let path = paths.settings_file();

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                CoinbookError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let settings: Settings = serde_json::from_str(&content).map_err(|e| {
                CoinbookError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to config.json
    pub fn save(&self, paths: &CoinbookPaths) -> Result<(), CoinbookError> {
        paths.ensure_directories()?;

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), content).map_err(|e| {
            CoinbookError::Config(format!("Failed to write settings: {}", e))
        })?;

        Ok(())
    }
}
