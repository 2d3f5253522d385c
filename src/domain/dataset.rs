//! The root document holding every collection
//!
//! `Dataset` is pure in-memory state. Operations here validate and mutate;
//! persisting the result is the caller's job (see [`crate::desk::Desk`]).

use serde::{Deserialize, Serialize};

use super::record::{EditReport, Editable, Record};
use super::shipment::{NewShipment, SearchField};
use super::{Customer, Driver, EntityKind, RecordError, Shipment, ShipmentStatus, Summary, Vehicle};

/// All records, in insertion order per collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub drivers: Vec<Driver>,
    pub vehicles: Vec<Vehicle>,
    pub shipments: Vec<Shipment>,
}

impl Dataset {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a record by id
    pub fn find<T: Record>(&self, id: &str) -> Option<&T> {
        T::collection(self).iter().find(|r| r.id() == id)
    }

    /// Returns true if a record with this id exists
    pub fn contains<T: Record>(&self, id: &str) -> bool {
        self.find::<T>(id).is_some()
    }

    /// Lists all records of a kind in insertion order
    pub fn list<T: Record>(&self) -> &[T] {
        T::collection(self)
    }

    /// Appends a record unless its id is already taken
    pub fn insert<T: Record>(&mut self, record: T) -> Result<(), RecordError> {
        if self.contains::<T>(record.id()) {
            return Err(RecordError::DuplicateId {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        }
        T::collection_mut(self).push(record);
        Ok(())
    }

    /// Applies a patch to the record with this id
    pub fn edit<T: Editable>(&mut self, id: &str, patch: &T::Patch) -> Result<EditReport, RecordError> {
        let record = T::collection_mut(self)
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found(T::KIND, id))?;
        Ok(record.apply(patch))
    }

    /// Removes the record with this id and returns it
    pub fn remove<T: Record>(&mut self, id: &str) -> Result<T, RecordError> {
        let records = T::collection_mut(self);
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found(T::KIND, id))?;
        Ok(records.remove(index))
    }

    /// Creates a pending shipment after checking its references
    ///
    /// Ids are trimmed before any lookup. Checks run in order: duplicate id,
    /// customer, driver, vehicle. The first failure wins and nothing is
    /// appended.
    pub fn create_shipment(
        &mut self,
        mut input: NewShipment,
        created_at: impl Into<String>,
    ) -> Result<&Shipment, RecordError> {
        for id in [
            &mut input.id,
            &mut input.customer_id,
            &mut input.driver_id,
            &mut input.vehicle_id,
        ] {
            *id = id.trim().to_string();
        }

        if self.contains::<Shipment>(&input.id) {
            return Err(RecordError::DuplicateId {
                kind: EntityKind::Shipment,
                id: input.id,
            });
        }
        self.require::<Customer>(&input.customer_id)?;
        self.require::<Driver>(&input.driver_id)?;
        self.require::<Vehicle>(&input.vehicle_id)?;

        let shipment = Shipment::new(input, created_at)?;
        self.shipments.push(shipment);
        Ok(&self.shipments[self.shipments.len() - 1])
    }

    /// Overwrites a shipment's status; any transition is allowed
    pub fn set_status(&mut self, id: &str, status: ShipmentStatus) -> Result<&Shipment, RecordError> {
        let shipment = self
            .shipments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found(EntityKind::Shipment, id))?;
        shipment.status = status;
        Ok(shipment)
    }

    /// Returns shipments matching `field == value`, in stored order
    ///
    /// An unrecognized field matches nothing.
    pub fn search_shipments(&self, field: &str, value: &str) -> Vec<&Shipment> {
        match SearchField::parse(field) {
            Some(field) => self
                .shipments
                .iter()
                .filter(|s| field.matches(s, value))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Aggregates counts and income over every shipment
    pub fn summary(&self) -> Summary {
        Summary::from_shipments(&self.shipments)
    }

    fn require<T: Record>(&self, id: &str) -> Result<(), RecordError> {
        if self.contains::<T>(id) {
            Ok(())
        } else {
            Err(RecordError::UnknownReference {
                kind: T::KIND,
                id: id.to_string(),
            })
        }
    }
}

fn not_found(kind: EntityKind, id: &str) -> RecordError {
    RecordError::NotFound {
        kind,
        id: id.to_string(),
    }
}
