//! Adapter implementations for port traits
//!
//! This module contains the code that touches the filesystem:
//!
//! - `json_file` - JSON snapshot file backing a rating store
//! - `export` - CSV and JSON bulk export

pub mod export;
pub mod json_file;

pub use export::ExportFormat;
pub use json_file::JsonFileStore;
