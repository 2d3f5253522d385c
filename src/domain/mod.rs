//! Domain models for Fleetdesk
//!
//! Contains the records, validation and workflow rules without any I/O concerns.

mod error;
mod record;
mod customer;
mod driver;
mod vehicle;
mod shipment;
mod dataset;
mod report;

pub use error::RecordError;
pub use record::{parse_quantity, EditReport, Editable, EntityKind, Record, RejectedField};
pub use customer::{Customer, CustomerPatch};
pub use driver::{Driver, DriverPatch};
pub use vehicle::{Vehicle, VehiclePatch};
pub use shipment::{timestamp_now, NewShipment, SearchField, Shipment, ShipmentStatus, CREATED_AT_FORMAT};
pub use dataset::Dataset;
pub use report::Summary;
