//! User settings for meterbook
//!
//! Manages audit trail preferences and password hashing cost.

use serde::{Deserialize, Serialize};

use super::paths::MeterPaths;
use crate::crypto::HashingParams;
use crate::error::MeterError;

/// Audit trail settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSettings {
    /// Write audit entries to the JSONL audit log file
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Also print each audit entry to the console
    #[serde(default)]
    pub echo: bool,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            echo: false,
        }
    }
}

/// User settings for meterbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Audit trail preferences
    #[serde(default)]
    pub audit: AuditSettings,

    /// Argon2 cost parameters for new password hashes
    #[serde(default)]
    pub password_hashing: HashingParams,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            audit: AuditSettings::default(),
            password_hashing: HashingParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &MeterPaths) -> Result<Self, MeterError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| MeterError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| MeterError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MeterPaths) -> Result<(), MeterError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MeterError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MeterError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
