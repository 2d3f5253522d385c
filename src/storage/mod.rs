//! # Storage Layer
//!
//! Persistence for the Fleetdesk dataset.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Dataset | Pretty JSON, one document | `transport_data.json` (or `--data`) |
//! | Config | TOML | `~/.config/fleetdesk/config.toml` |
//!
//! ## Write Model
//!
//! The whole dataset is rewritten after every change. [`JsonFileStore`]
//! writes to a temp file under an exclusive lock and renames it into place.
//! Nothing guards against two processes editing the same file.
//!
//! ## Key Types
//!
//! - [`DatasetStore`] - Load/save seam, injected into [`crate::desk::Desk`]
//! - [`JsonFileStore`] - The on-disk store
//! - [`MemoryStore`] - In-process store for tests
//! - [`Config`] - User configuration

mod json;
mod memory;
mod config;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Dataset;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use config::{Config, ConfigError, OutputFormat, DEFAULT_DATA_FILE};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Data file {} is not a valid dataset", .path.display())]
    DataFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to {} {}", .action, .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize dataset")]
    Serialize(#[source] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Loads and saves the whole dataset
pub trait DatasetStore {
    /// Loads the dataset, or an empty one if nothing has been saved yet
    fn load(&self) -> Result<Dataset, StoreError>;

    /// Overwrites the stored dataset
    fn save(&self, data: &Dataset) -> Result<(), StoreError>;

    /// Describes where the data lives (for messages)
    fn location(&self) -> String;
}
