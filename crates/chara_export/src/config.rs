//! Export output configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where snapshot documents are written
///
/// The core performs no sanitization of snapshot prefixes; callers supply
/// filesystem-safe names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving `<prefix>.json` snapshot files
    pub output_root: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("snapshots"),
        }
    }
}

impl ExportConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Target path for a snapshot: `<output_root>/<prefix>.json`
    #[must_use]
    pub fn output_path(&self, prefix: &str) -> PathBuf {
        self.output_root.join(format!("{prefix}.json"))
    }

    /// Create the output root if it does not exist yet
    pub fn ensure_output_root(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.output_root).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_root() {
        let config = ExportConfig::default();
        assert_eq!(config.output_root, PathBuf::from("snapshots"));
    }

    #[test]
    fn test_output_path_join() {
        let config = ExportConfig {
            output_root: PathBuf::from("/tmp/out"),
        };
        assert_eq!(
            config.output_path("Chara63245"),
            PathBuf::from("/tmp/out/Chara63245.json")
        );
    }

    #[test]
    fn test_parse_from_toml() {
        let config: ExportConfig = toml::from_str("output_root = \"exports\"").unwrap();
        assert_eq!(config.output_root, PathBuf::from("exports"));
    }
}
