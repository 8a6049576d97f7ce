//! JSON file snapshot storage
//!
//! Snapshots are written to a temporary sibling file and then renamed over
//! the target, so the file on disk is always either the old or the new
//! snapshot, never a partial write. A file that fails to load is copied to
//! `<path>.bak` before the store gets a chance to overwrite it.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::core::models::Snapshot;
use crate::core::ports::SnapshotStore;

/// Snapshot store backed by a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store snapshots at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let snapshot = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let content =
            serde_json::to_string_pretty(snapshot).context("failed to serialize snapshot")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let tmp = self.sibling(".tmp");
        fs::write(&tmp, content).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn back_up(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.sibling(".bak");
        fs::copy(&self.path, &backup)
            .with_context(|| format!("failed to copy {} to {}", self.path.display(), backup.display()))?;
        Ok(Some(backup.display().to_string()))
    }
}
