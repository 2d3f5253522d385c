//! Customer CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::roster;
use crate::desk::Desk;
use crate::domain::{Customer, CustomerPatch};
use crate::storage::DatasetStore;

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Add a customer
    Add {
        /// Customer ID
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        address: String,
    },

    /// List all customers
    List,

    /// Show customer details
    Show {
        /// Customer ID
        id: String,
    },

    /// Edit a customer (omitted fields keep their value)
    Edit {
        /// Customer ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a customer
    Remove {
        /// Customer ID
        id: String,
    },
}

pub fn run<S: DatasetStore>(cmd: CustomerCommands, desk: &mut Desk<S>, output: &Output) -> Result<()> {
    match cmd {
        CustomerCommands::Add {
            id,
            name,
            phone,
            address,
        } => roster::add(desk, output, Customer::new(id, name, phone, address)?),
        CustomerCommands::List => {
            roster::list::<Customer, S>(desk, output, "Customers");
            Ok(())
        }
        CustomerCommands::Show { id } => roster::show::<Customer, S>(desk, output, &id),
        CustomerCommands::Edit {
            id,
            name,
            phone,
            address,
        } => {
            let patch = CustomerPatch {
                name,
                phone,
                address,
            };
            roster::edit::<Customer, S>(desk, output, &id, &patch)
        }
        CustomerCommands::Remove { id } => roster::remove::<Customer, S>(desk, output, &id),
    }
}
