//! Shipment CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::{summary_text, Output};
use super::roster;
use crate::desk::Desk;
use crate::domain::{parse_quantity, NewShipment, SearchField, Shipment};
use crate::storage::DatasetStore;

#[derive(Subcommand)]
pub enum ShipmentCommands {
    /// Create a shipment (starts as Pending)
    Create {
        /// Shipment ID
        id: String,

        /// Customer ID (must exist)
        #[arg(long)]
        customer: String,

        /// Driver ID (must exist)
        #[arg(long)]
        driver: String,

        /// Vehicle ID (must exist)
        #[arg(long)]
        vehicle: String,

        /// Origin
        #[arg(long)]
        from: String,

        /// Destination
        #[arg(long)]
        to: String,

        /// Weight in kilograms
        #[arg(long)]
        weight: String,

        /// Price in USD
        #[arg(long)]
        price: String,
    },

    /// List all shipments
    List,

    /// Show shipment details
    Show {
        /// Shipment ID
        id: String,
    },

    /// Update a shipment's status
    ///
    /// STATUS is 1 (Pending), 2 (In Transit), 3 (Delivered), 4 (Cancelled)
    /// or the status name.
    Status {
        /// Shipment ID
        id: String,

        /// New status
        status: String,
    },

    /// Search shipments by id, customer, driver, vehicle or status
    Search {
        /// Field to match (id, customer, driver, vehicle, status)
        field: String,

        /// Value to match; status ignores case
        value: String,
    },
}

pub fn run<S: DatasetStore>(cmd: ShipmentCommands, desk: &mut Desk<S>, output: &Output) -> Result<()> {
    match cmd {
        ShipmentCommands::Create {
            id,
            customer,
            driver,
            vehicle,
            from,
            to,
            weight,
            price,
        } => {
            let input = NewShipment {
                id,
                customer_id: customer,
                driver_id: driver,
                vehicle_id: vehicle,
                origin: from,
                destination: to,
                weight_kg: parse_quantity("weight_kg", &weight)?,
                price_usd: parse_quantity("price_usd", &price)?,
            };
            create(desk, output, input)
        }
        ShipmentCommands::List => {
            roster::list::<Shipment, S>(desk, output, "Shipments");
            Ok(())
        }
        ShipmentCommands::Show { id } => roster::show::<Shipment, S>(desk, output, &id),
        ShipmentCommands::Status { id, status } => update_status(desk, output, &id, &status),
        ShipmentCommands::Search { field, value } => {
            search(desk, output, &field, &value);
            Ok(())
        }
    }
}

fn create<S: DatasetStore>(desk: &mut Desk<S>, output: &Output, input: NewShipment) -> Result<()> {
    output.verbose_ctx(
        "shipment",
        &format!(
            "Creating {} for customer={} driver={} vehicle={}",
            input.id, input.customer_id, input.driver_id, input.vehicle_id
        ),
    );
    let shipment = desk.create_shipment(input)?;

    if output.is_json() {
        output.data(&shipment);
    } else {
        output.success(&format!(
            "Created shipment {} ({} -> {}), status {}",
            shipment.id, shipment.origin, shipment.destination, shipment.status
        ));
    }
    Ok(())
}

fn update_status<S: DatasetStore>(
    desk: &mut Desk<S>,
    output: &Output,
    id: &str,
    selection: &str,
) -> Result<()> {
    let shipment = desk.update_status(id, selection)?;

    if output.is_json() {
        output.data(&shipment);
    } else {
        output.success(&format!("Shipment {} is now {}", shipment.id, shipment.status));
    }
    Ok(())
}

fn search<S: DatasetStore>(desk: &Desk<S>, output: &Output, field: &str, value: &str) {
    if SearchField::parse(field).is_none() {
        output.verbose_ctx(
            "search",
            &format!("Unknown field '{}', expected id/customer/driver/vehicle/status", field),
        );
    }

    let results: Vec<Shipment> = desk
        .search_shipments(field, value)
        .into_iter()
        .cloned()
        .collect();
    output.verbose_ctx("search", &format!("Found {} shipments", results.len()));
    output.records("Search Results (Shipments)", &results);
}

/// Prints the lifetime summary report
pub fn report<S: DatasetStore>(desk: &Desk<S>, output: &Output) {
    let summary = desk.summary();
    if output.is_json() {
        output.data(&summary);
    } else {
        print!("{}", summary_text(&summary));
    }
}
