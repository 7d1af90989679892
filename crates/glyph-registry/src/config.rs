//! Registry configuration
//!
//! Optional TOML file, e.g.:
//!
//! ```toml
//! db_path = "assets/glyphs.db"
//! autoload = true
//! strict_load = false
//! ```

use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default database file name, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "glyphs.db";

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// File used by save and load
    pub db_path: PathBuf,
    /// Load `db_path` on start-up when it exists
    pub autoload: bool,
    /// Reject loaded data with duplicate ids or paths
    pub strict_load: bool,
}

impl RegistryConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With database path
    #[inline]
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// With start-up autoload
    #[inline]
    #[must_use]
    pub fn with_autoload(mut self, autoload: bool) -> Self {
        self.autoload = autoload;
        self
    }

    /// With strict (validating) load
    #[inline]
    #[must_use]
    pub fn with_strict_load(mut self, strict: bool) -> Self {
        self.strict_load = strict;
        self
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML for this struct.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not valid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(StorageError::io_error(path, e)))?;
        Self::from_toml_str(&text)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            autoload: false,
            strict_load: false,
        }
    }
}

/// Errors reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("{0}")]
    Io(StorageError),

    /// Config text is not valid
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RegistryConfig::new();
        assert_eq!(config.db_path, PathBuf::from("glyphs.db"));
        assert!(!config.autoload);
        assert!(!config.strict_load);
    }

    #[test]
    fn builder_methods() {
        let config = RegistryConfig::new()
            .with_db_path("/tmp/x.db")
            .with_autoload(true)
            .with_strict_load(true);
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
        assert!(config.autoload);
        assert!(config.strict_load);
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let config = RegistryConfig::from_toml_str("autoload = true\n").unwrap();
        assert!(config.autoload);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE));
    }

    #[test]
    fn parse_full_toml() {
        let config = RegistryConfig::from_toml_str(
            "db_path = \"assets/glyphs.db\"\nautoload = false\nstrict_load = true\n",
        )
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("assets/glyphs.db"));
        assert!(config.strict_load);
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let err = RegistryConfig::from_toml_str("autoload = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyph.toml");
        std::fs::write(&path, "db_path = \"other.db\"\n").unwrap();

        let config = RegistryConfig::from_file(&path).unwrap();
        assert_eq!(config.db_path, PathBuf::from("other.db"));

        let err = RegistryConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
