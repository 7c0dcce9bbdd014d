//! Dataset locations.
//!
//! The library never opens these files; the paths are handed to whatever
//! loads or writes the `kc_swqi` datasets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Original dataset.
pub const ORIGINAL_DATA_PATH: &str = "input/kc_swqi.csv";
/// Preliminarily modified dataset.
pub const MODIFIED_DATA_PATH: &str = "input/kc_swqi_md.csv";
/// Processed dataset.
pub const PROCESSED_DATA_PATH: &str = "input/kc_swqi_proc.csv";

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Locations of the three dataset stages. Missing keys fall back to the
/// constants above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub original: PathBuf,
    pub modified: PathBuf,
    pub processed: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            original: PathBuf::from(ORIGINAL_DATA_PATH),
            modified: PathBuf::from(MODIFIED_DATA_PATH),
            processed: PathBuf::from(PROCESSED_DATA_PATH),
        }
    }
}

impl DataPaths {
    /// Parses paths from a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Loads paths from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let paths: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded dataset paths from {}: {:?}", path.display(), paths);
        Ok(paths)
    }

    /// Resolves relative paths against `base`. Absolute paths are kept.
    pub fn relative_to(&self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let resolve = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };
        Self {
            original: resolve(&self.original),
            modified: resolve(&self.modified),
            processed: resolve(&self.processed),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}
