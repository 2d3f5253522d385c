//! Shipment records and their status lifecycle
//!
//! A shipment references a customer, a driver and a vehicle by id. The
//! references are checked when the shipment is created and never again, so
//! deleting a referenced record later leaves the id dangling.

use std::fmt;
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::record::{quantity, required, EntityKind, Record};
use super::{Dataset, RecordError};

/// Format of `created_at` stamps
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Status of a shipment
///
/// Any status may follow any other, including itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShipmentStatus {
    #[default]
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
}

impl ShipmentStatus {
    /// All statuses in menu order
    pub const ALL: [ShipmentStatus; 4] = [
        ShipmentStatus::Pending,
        ShipmentStatus::InTransit,
        ShipmentStatus::Delivered,
        ShipmentStatus::Cancelled,
    ];

    /// Returns the literal stored in the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Cancelled => "Cancelled",
        }
    }

    /// Returns true if the shipment still counts towards income
    pub fn is_billable(&self) -> bool {
        !matches!(self, ShipmentStatus::Cancelled)
    }

    /// Parses a menu selection (`1`-`4`) or a status name, ignoring case
    pub fn from_selection(selection: &str) -> Result<Self, RecordError> {
        let normalized = selection.trim().to_lowercase();
        let status = match normalized.as_str() {
            "1" | "pending" => ShipmentStatus::Pending,
            "2" | "in transit" | "in-transit" | "in_transit" => ShipmentStatus::InTransit,
            "3" | "delivered" => ShipmentStatus::Delivered,
            "4" | "cancelled" => ShipmentStatus::Cancelled,
            _ => return Err(RecordError::invalid("status", selection)),
        };
        Ok(status)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ShipmentStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selection(s)
    }
}

/// A shipment of goods from origin to destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub customer_id: String,
    pub driver_id: String,
    pub vehicle_id: String,
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub price_usd: f64,
    pub status: ShipmentStatus,

    /// Local creation time, `YYYY-MM-DD HH:MM:SS`; never changes
    pub created_at: String,
}

/// Input for creating a shipment
#[derive(Debug, Clone, PartialEq)]
pub struct NewShipment {
    pub id: String,
    pub customer_id: String,
    pub driver_id: String,
    pub vehicle_id: String,
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub price_usd: f64,
}

impl Shipment {
    /// Builds a pending shipment stamped with `created_at`
    pub fn new(input: NewShipment, created_at: impl Into<String>) -> Result<Self, RecordError> {
        Ok(Self {
            id: required("id", input.id)?,
            customer_id: required("customer_id", input.customer_id)?,
            driver_id: required("driver_id", input.driver_id)?,
            vehicle_id: required("vehicle_id", input.vehicle_id)?,
            origin: required("origin", input.origin)?,
            destination: required("destination", input.destination)?,
            weight_kg: quantity("weight_kg", input.weight_kg)?,
            price_usd: quantity("price_usd", input.price_usd)?,
            status: ShipmentStatus::Pending,
            created_at: created_at.into(),
        })
    }
}

/// Returns the current local time as a `created_at` stamp
pub fn timestamp_now() -> String {
    Local::now().format(CREATED_AT_FORMAT).to_string()
}

impl Record for Shipment {
    const KIND: EntityKind = EntityKind::Shipment;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &Dataset) -> &[Self] {
        &data.shipments
    }

    fn collection_mut(data: &mut Dataset) -> &mut Vec<Self> {
        &mut data.shipments
    }
}

/// Field a shipment search matches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Id,
    Customer,
    Driver,
    Vehicle,
    Status,
}

impl SearchField {
    /// Parses a field name, ignoring case; unknown names yield `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "id" => Some(SearchField::Id),
            "customer" => Some(SearchField::Customer),
            "driver" => Some(SearchField::Driver),
            "vehicle" => Some(SearchField::Vehicle),
            "status" => Some(SearchField::Status),
            _ => None,
        }
    }

    /// Exact match on ids; status compares without regard to case
    pub fn matches(&self, shipment: &Shipment, value: &str) -> bool {
        match self {
            SearchField::Id => shipment.id == value,
            SearchField::Customer => shipment.customer_id == value,
            SearchField::Driver => shipment.driver_id == value,
            SearchField::Vehicle => shipment.vehicle_id == value,
            SearchField::Status => shipment.status.as_str().to_lowercase() == value.to_lowercase(),
        }
    }
}
