//! Configuration management
//!
//! Settings come from, in order of precedence: command-line flags, the
//! project file `.lbtas.toml`, the global file `~/.lbtas/config.toml`, and
//! built-in defaults.
//!
//! ```toml
//! [storage]
//! path = "lbtas_ratings.json"
//!
//! [ratings]
//! categories = ["reliability", "usability", "performance", "support"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::{Criteria, CriteriaError, DEFAULT_CATEGORIES};
use crate::paths;

/// lbtas configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where ratings are persisted
    #[serde(default)]
    pub storage: StorageConfig,
    /// What exchanges are rated on
    #[serde(default)]
    pub ratings: RatingsConfig,
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot file path
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(paths::DEFAULT_STORAGE_FILE)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Rating settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingsConfig {
    /// Categories, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect()
}

impl Default for RatingsConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Read a config file. Returns `Ok(None)` if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&content)?))
    }

    /// Resolve configuration for `project_dir`.
    ///
    /// The project file wins over the global file. A file that cannot be
    /// read or parsed is logged and skipped.
    #[must_use]
    pub fn load(project_dir: &Path) -> Self {
        Self::load_layered(&paths::project_config(project_dir), &paths::global_config())
    }

    /// Resolve configuration from explicit project and global files
    #[must_use]
    pub fn load_layered(project: &Path, global: &Path) -> Self {
        for path in [project, global] {
            match Self::load_from(path) {
                Ok(Some(config)) => {
                    log::debug!("Using config from {}", path.display());
                    return config;
                },
                Ok(None) => {},
                Err(err) => {
                    log::warn!("Ignoring config {}: {err:#}", path.display());
                },
            }
        }
        Self::default()
    }

    /// Write the config as TOML
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validated category set
    pub fn criteria(&self) -> Result<Criteria, CriteriaError> {
        Criteria::new(self.ratings.categories.iter().cloned())
    }
}
