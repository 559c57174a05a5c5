//! User settings for Ledgerly
//!
//! A small JSON settings file controlling display preferences.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

/// User settings for Ledgerly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used when rendering dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
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

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults on first run
    pub fn load_or_create(paths: &LedgerPaths) -> LedgerResult<Self> {
        let path = paths.settings_file();

        if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                LedgerError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                LedgerError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Persist settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> LedgerResult<()> {
        paths.ensure_directories()?;
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), raw)
            .map_err(|e| LedgerError::Config(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }
}
