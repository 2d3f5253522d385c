//! JSON file storage for the dataset
//!
//! The dataset lives in one pretty-printed JSON document with the keys
//! `customers`, `drivers`, `vehicles` and `shipments`.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{DatasetStore, StoreError};
use crate::domain::Dataset;

/// Store for the dataset as a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a new store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DatasetStore for JsonFileStore {
    fn load(&self) -> Result<Dataset, StoreError> {
        if !self.path.exists() {
            return Ok(Dataset::default());
        }

        let file = File::open(&self.path).map_err(|e| StoreError::io("open", &self.path, e))?;

        // Shared lock while reading; released when the file is dropped
        file.lock_shared()
            .map_err(|e| StoreError::io("lock", &self.path, e))?;

        serde_json::from_reader(BufReader::new(&file)).map_err(|source| StoreError::DataFormat {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, data: &Dataset) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io("create directory", parent, e))?;
        }

        let temp_path = self.temp_path();

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| StoreError::io("create", &temp_path, e))?;

            file.lock_exclusive()
                .map_err(|e| StoreError::io("lock", &temp_path, e))?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, data).map_err(StoreError::Serialize)?;
            writeln!(writer).map_err(|e| StoreError::io("write", &temp_path, e))?;
            writer
                .flush()
                .map_err(|e| StoreError::io("flush", &temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io("replace", &self.path, e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
