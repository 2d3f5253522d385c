//! Vehicle records

use serde::{Deserialize, Serialize};

use super::record::{non_blank, parse_quantity, quantity, required, EditReport, Editable, EntityKind, Record};
use super::{Dataset, RecordError};

/// A vehicle in the fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,

    /// License plate number
    pub plate: String,

    /// Kind of vehicle (truck, van, ...)
    #[serde(rename = "type")]
    pub vehicle_type: String,

    /// Maximum load in kilograms
    pub capacity_kg: f64,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        plate: impl Into<String>,
        vehicle_type: impl Into<String>,
        capacity_kg: f64,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            id: required("id", id)?,
            plate: required("plate", plate)?,
            vehicle_type: required("type", vehicle_type)?,
            capacity_kg: quantity("capacity_kg", capacity_kg)?,
        })
    }
}

/// Field changes for a vehicle
///
/// Capacity is carried as the text the user typed. If it does not parse as a
/// non-negative number it is rejected on its own; the other fields still apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehiclePatch {
    pub plate: Option<String>,
    pub vehicle_type: Option<String>,
    pub capacity_kg: Option<String>,
}

impl Record for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &Dataset) -> &[Self] {
        &data.vehicles
    }

    fn collection_mut(data: &mut Dataset) -> &mut Vec<Self> {
        &mut data.vehicles
    }
}

impl Editable for Vehicle {
    type Patch = VehiclePatch;

    fn apply(&mut self, patch: &VehiclePatch) -> EditReport {
        let mut report = EditReport::default();
        report.set_text("plate", &mut self.plate, patch.plate.as_deref());
        report.set_text("type", &mut self.vehicle_type, patch.vehicle_type.as_deref());

        if let Some(text) = non_blank(patch.capacity_kg.as_deref()) {
            match parse_quantity("capacity_kg", text) {
                Ok(capacity) if capacity != self.capacity_kg => {
                    self.capacity_kg = capacity;
                    report.changed.push("capacity_kg");
                }
                Ok(_) => {}
                Err(_) => report.reject("capacity_kg", text),
            }
        }

        report
    }
}
