//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the rating engine and where
//! its data is kept. Implementations live in the `adapters` module; tests
//! provide their own in-memory versions.

mod snapshot_store;

pub use snapshot_store::SnapshotStore;
