//! Path management for meterbook
//!
//! Provides XDG-compliant path resolution for the configuration file and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory (the `--data-dir` flag)
//! 2. `METERBOOK_DATA_DIR` environment variable (if set)
//! 3. Unix (Linux/macOS): `$XDG_CONFIG_HOME/meterbook` or `~/.config/meterbook`
//! 4. Windows: `%APPDATA%\meterbook`

use std::path::{Path, PathBuf};

use crate::error::MeterError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "METERBOOK_DATA_DIR";

/// Manages all paths used by meterbook
#[derive(Debug, Clone)]
pub struct MeterPaths {
    /// Base directory for all meterbook files
    base_dir: PathBuf,
}

impl MeterPaths {
    /// Create a new MeterPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, MeterError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MeterPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve from an optional explicit directory, falling back to `new()`
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, MeterError> {
        match explicit {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), MeterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MeterError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if meterbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MeterError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| MeterError::Config("Could not determine HOME directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("meterbook"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MeterError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MeterError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("meterbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MeterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MeterPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MeterPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.base_dir().exists());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
