//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::customer::{self, CustomerCommands};
use super::driver::{self, DriverCommands};
use super::output::{Output, OutputFormat};
use super::shell::Shell;
use super::shipment::{self, ShipmentCommands};
use super::vehicle::{self, VehicleCommands};
use crate::desk::Desk;
use crate::storage::{Config, DatasetStore, JsonFileStore};

#[derive(Parser)]
#[command(name = "fleetdesk")]
#[command(author, version, about = "Record keeping for a small transport company")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data file (defaults to the configured file, then ./transport_data.json)
    #[arg(long, short = 'd', global = true, env = "FLEETDESK_DATA")]
    pub data: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "FLEETDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Command to run; without one the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu
    Shell,

    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommands),

    /// Manage drivers
    #[command(subcommand)]
    Driver(DriverCommands),

    /// Manage vehicles
    #[command(subcommand)]
    Vehicle(VehicleCommands),

    /// Manage shipments
    #[command(subcommand)]
    Shipment(ShipmentCommands),

    /// Show the shipment and income summary
    Report,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    output.verbose("Fleetdesk starting");
    if let Some(source) = &config.source {
        output.verbose_ctx("config", &format!("Loaded config from: {}", source.display()));
    }

    let data_file = config.resolve_data_file(cli.data.as_deref());
    output.verbose_ctx("store", &format!("Using data file: {}", data_file.display()));

    let store = JsonFileStore::new(&data_file);
    let mut desk = Desk::open(store)
        .with_context(|| format!("Failed to load data from {}", data_file.display()))?;
    output.verbose_ctx(
        "store",
        &format!(
            "Loaded {} customers, {} drivers, {} vehicles, {} shipments",
            desk.data().customers.len(),
            desk.data().drivers.len(),
            desk.data().vehicles.len(),
            desk.data().shipments.len()
        ),
    );

    dispatch(cli.command.unwrap_or(Commands::Shell), &mut desk, &output)?;

    output.verbose("Command completed successfully");
    Ok(())
}

fn dispatch<S: DatasetStore>(command: Commands, desk: &mut Desk<S>, output: &Output) -> Result<()> {
    match command {
        Commands::Shell => {
            output.verbose_ctx("shell", &format!("Interactive mode on {}", desk.store().location()));
            let stdin = io::stdin();
            Shell::new(desk, stdin.lock(), io::stdout()).run()?
        }
        Commands::Customer(cmd) => customer::run(cmd, desk, output)?,
        Commands::Driver(cmd) => driver::run(cmd, desk, output)?,
        Commands::Vehicle(cmd) => vehicle::run(cmd, desk, output)?,
        Commands::Shipment(cmd) => shipment::run(cmd, desk, output)?,
        Commands::Report => shipment::report(desk, output),
    }
    Ok(())
}
