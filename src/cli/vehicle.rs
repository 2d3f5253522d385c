//! Vehicle CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::roster;
use crate::desk::Desk;
use crate::domain::{parse_quantity, Vehicle, VehiclePatch};
use crate::storage::DatasetStore;

#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Add a vehicle
    Add {
        /// Vehicle ID
        id: String,

        /// License plate
        #[arg(long)]
        plate: String,

        /// Vehicle type (truck, van, ...)
        #[arg(long = "type")]
        vehicle_type: String,

        /// Capacity in kilograms
        #[arg(long)]
        capacity: String,
    },

    /// List all vehicles
    List,

    /// Show vehicle details
    Show {
        /// Vehicle ID
        id: String,
    },

    /// Edit a vehicle (omitted fields keep their value)
    ///
    /// An invalid capacity is reported and ignored; other fields still apply.
    Edit {
        /// Vehicle ID
        id: String,

        #[arg(long)]
        plate: Option<String>,

        #[arg(long = "type")]
        vehicle_type: Option<String>,

        /// Capacity in kilograms
        #[arg(long)]
        capacity: Option<String>,
    },

    /// Delete a vehicle
    Remove {
        /// Vehicle ID
        id: String,
    },
}

pub fn run<S: DatasetStore>(cmd: VehicleCommands, desk: &mut Desk<S>, output: &Output) -> Result<()> {
    match cmd {
        VehicleCommands::Add {
            id,
            plate,
            vehicle_type,
            capacity,
        } => {
            let capacity = parse_quantity("capacity_kg", &capacity)?;
            roster::add(desk, output, Vehicle::new(id, plate, vehicle_type, capacity)?)
        }
        VehicleCommands::List => {
            roster::list::<Vehicle, S>(desk, output, "Vehicles");
            Ok(())
        }
        VehicleCommands::Show { id } => roster::show::<Vehicle, S>(desk, output, &id),
        VehicleCommands::Edit {
            id,
            plate,
            vehicle_type,
            capacity,
        } => {
            let patch = VehiclePatch {
                plate,
                vehicle_type,
                capacity_kg: capacity,
            };
            roster::edit::<Vehicle, S>(desk, output, &id, &patch)
        }
        VehicleCommands::Remove { id } => roster::remove::<Vehicle, S>(desk, output, &id),
    }
}
