//! In-memory dataset store
//!
//! Keeps the last saved dataset in process. Used by tests, and handy for
//! scripting against [`crate::desk::Desk`] without touching disk.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{DatasetStore, StoreError};
use crate::domain::Dataset;

/// Store that keeps the dataset in memory
///
/// Clones share the same backing state, so a test can keep a handle while
/// the desk owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    saved: RefCell<Option<Dataset>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a dataset
    pub fn with_data(data: Dataset) -> Self {
        let store = Self::new();
        *store.inner.saved.borrow_mut() = Some(data);
        store
    }

    /// Makes every following save fail
    pub fn fail_saves(&self, fail: bool) {
        self.inner.fail_saves.set(fail);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.inner.saves.get()
    }

    /// Last saved dataset, if any
    pub fn snapshot(&self) -> Option<Dataset> {
        self.inner.saved.borrow().clone()
    }
}

impl DatasetStore for MemoryStore {
    fn load(&self) -> Result<Dataset, StoreError> {
        Ok(self.snapshot().unwrap_or_default())
    }

    fn save(&self, data: &Dataset) -> Result<(), StoreError> {
        if self.inner.fail_saves.get() {
            return Err(StoreError::Unavailable("memory store is set to fail".into()));
        }
        *self.inner.saved.borrow_mut() = Some(data.clone());
        self.inner.saves.set(self.inner.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
