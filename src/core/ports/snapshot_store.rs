//! Snapshot store port
//!
//! Defines where a rating store's snapshot lives.

use crate::core::models::Snapshot;

/// Persistence target for a rating store
///
/// Implementations must make `save` all-or-nothing: when it fails, the
/// previously saved snapshot stays readable.
pub trait SnapshotStore: std::fmt::Debug {
    /// Read the current snapshot, or `None` if nothing has been saved yet
    fn load(&self) -> anyhow::Result<Option<Snapshot>>;

    /// Replace the stored snapshot
    fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()>;

    /// Human-readable location for log and warning messages
    fn location(&self) -> String;

    /// Copy an unreadable snapshot aside before it can be overwritten.
    ///
    /// Returns where the copy went, or `None` if there was nothing to keep.
    fn back_up(&self) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}
