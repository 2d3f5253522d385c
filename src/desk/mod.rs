//! # Desk
//!
//! The operation layer. A [`Desk`] owns the loaded [`Dataset`] and an
//! injected [`DatasetStore`]. Reads go straight to memory; every mutation is
//! applied to a copy of the dataset, the copy is saved, and only then does it
//! replace the in-memory state. A failed validation or a failed save leaves
//! both memory and disk untouched.

use thiserror::Error;

use crate::domain::{
    timestamp_now, Customer, Dataset, Driver, EditReport, Editable, EntityKind, NewShipment,
    Record, RecordError, Shipment, ShipmentStatus, Summary, Vehicle,
};
use crate::storage::{DatasetStore, StoreError};

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DeskError {
    /// Returns the record error, if this is one
    pub fn as_record(&self) -> Option<&RecordError> {
        match self {
            DeskError::Record(e) => Some(e),
            DeskError::Store(_) => None,
        }
    }
}

/// Records that may be added, edited and removed directly
///
/// Shipments are excluded: they are created through [`Desk::create_shipment`]
/// so their references get checked.
pub trait Roster: Editable {}

impl Roster for Customer {}
impl Roster for Driver {}
impl Roster for Vehicle {}

/// A loaded dataset bound to the store it persists to
pub struct Desk<S: DatasetStore> {
    data: Dataset,
    store: S,
    clock: fn() -> String,
}

impl<S: DatasetStore> Desk<S> {
    /// Loads the dataset from the store
    pub fn open(store: S) -> Result<Self, StoreError> {
        let data = store.load()?;
        Ok(Self::new(store, data))
    }

    /// Wraps an already loaded dataset
    pub fn new(store: S, data: Dataset) -> Self {
        Self {
            data,
            store,
            clock: timestamp_now,
        }
    }

    /// Replaces the clock used to stamp `created_at`
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn find<T: Record>(&self, id: &str) -> Option<&T> {
        self.data.find(id)
    }

    pub fn list<T: Record>(&self) -> &[T] {
        self.data.list()
    }

    /// Adds a customer, driver or vehicle
    pub fn add<T: Roster>(&mut self, record: T) -> Result<(), DeskError> {
        self.commit(|data| data.insert(record))
    }

    /// Edits a customer, driver or vehicle in place
    pub fn edit<T: Roster>(&mut self, id: &str, patch: &T::Patch) -> Result<EditReport, DeskError> {
        self.commit(|data| data.edit::<T>(id, patch))
    }

    /// Removes a customer, driver or vehicle
    ///
    /// Shipments referencing the record keep their now dangling id.
    pub fn remove<T: Roster>(&mut self, id: &str) -> Result<T, DeskError> {
        self.commit(|data| data.remove::<T>(id))
    }

    /// Creates a pending shipment stamped with the current local time
    pub fn create_shipment(&mut self, input: NewShipment) -> Result<Shipment, DeskError> {
        let created_at = (self.clock)();
        self.commit(|data| data.create_shipment(input, created_at).cloned())
    }

    /// Sets a shipment's status from a menu selection or status name
    ///
    /// The shipment must exist before the selection is looked at.
    pub fn update_status(&mut self, id: &str, selection: &str) -> Result<Shipment, DeskError> {
        if !self.data.contains::<Shipment>(id) {
            return Err(RecordError::NotFound {
                kind: EntityKind::Shipment,
                id: id.to_string(),
            }
            .into());
        }
        let status = ShipmentStatus::from_selection(selection)?;
        self.set_status(id, status)
    }

    /// Sets a shipment's status
    pub fn set_status(&mut self, id: &str, status: ShipmentStatus) -> Result<Shipment, DeskError> {
        self.commit(|data| data.set_status(id, status).cloned())
    }

    pub fn search_shipments(&self, field: &str, value: &str) -> Vec<&Shipment> {
        self.data.search_shipments(field, value)
    }

    pub fn summary(&self) -> Summary {
        self.data.summary()
    }

    fn commit<R>(
        &mut self,
        change: impl FnOnce(&mut Dataset) -> Result<R, RecordError>,
    ) -> Result<R, DeskError> {
        let mut next = self.data.clone();
        let result = change(&mut next)?;
        self.store.save(&next)?;
        self.data = next;
        Ok(result)
    }
}
