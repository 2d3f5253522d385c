//! Driver CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::roster;
use crate::desk::Desk;
use crate::domain::{Driver, DriverPatch};
use crate::storage::DatasetStore;

#[derive(Subcommand)]
pub enum DriverCommands {
    /// Add a driver
    Add {
        /// Driver ID
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        /// License number
        #[arg(long)]
        license: String,
    },

    /// List all drivers
    List,

    /// Show driver details
    Show {
        /// Driver ID
        id: String,
    },

    /// Edit a driver (omitted fields keep their value)
    Edit {
        /// Driver ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        license: Option<String>,
    },

    /// Delete a driver
    Remove {
        /// Driver ID
        id: String,
    },
}

pub fn run<S: DatasetStore>(cmd: DriverCommands, desk: &mut Desk<S>, output: &Output) -> Result<()> {
    match cmd {
        DriverCommands::Add {
            id,
            name,
            phone,
            license,
        } => roster::add(desk, output, Driver::new(id, name, phone, license)?),
        DriverCommands::List => {
            roster::list::<Driver, S>(desk, output, "Drivers");
            Ok(())
        }
        DriverCommands::Show { id } => roster::show::<Driver, S>(desk, output, &id),
        DriverCommands::Edit {
            id,
            name,
            phone,
            license,
        } => {
            let patch = DriverPatch {
                name,
                phone,
                license,
            };
            roster::edit::<Driver, S>(desk, output, &id, &patch)
        }
        DriverCommands::Remove { id } => roster::remove::<Driver, S>(desk, output, &id),
    }
}
