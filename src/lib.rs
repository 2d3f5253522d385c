//! Fleetdesk - local-first record keeping for a small transport company
//!
//! Fleetdesk tracks customers, drivers, vehicles and shipments in a single
//! JSON document. Every change is written back to disk as soon as it is made.

pub mod domain;
pub mod storage;
pub mod desk;
pub mod cli;

pub use desk::{Desk, DeskError};
pub use domain::{
    Customer, Dataset, Driver, EntityKind, RecordError, Shipment, ShipmentStatus, Summary, Vehicle,
};
