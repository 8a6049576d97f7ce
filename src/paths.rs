//! Centralized path definitions for lbtas
//!
//! ## Storage Layout
//!
//! ```text
//! project/
//! ├── .lbtas.toml            # Project config (optional)
//! └── lbtas_ratings.json     # Rating snapshot (default location)
//!
//! ~/.lbtas/
//! └── config.toml            # Global config (optional)
//! ```

use std::path::{Path, PathBuf};

/// Default snapshot filename, relative to the working directory
pub const DEFAULT_STORAGE_FILE: &str = "lbtas_ratings.json";

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".lbtas.toml";

/// Global directory name under the user's home
const GLOBAL_DIR: &str = ".lbtas";

/// Global configuration filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config inside `dir`
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Get the global config directory (`~/.lbtas`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path (`~/.lbtas/config.toml`)
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
