//! # Command-Line Interface
//!
//! User-facing CLI commands, output formatting and the interactive shell.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Records | Customers, drivers, vehicles | `customer add`, `vehicle edit` |
//! | Shipments | Create and track shipments | `shipment create`, `shipment status` |
//! | Report | Lifetime summary | `report` |
//! | Shell | Numbered menus | `shell` (or no command) |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! fleetdesk --verbose report
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod roster;
mod customer;
mod driver;
mod vehicle;
mod shipment;
mod shell;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat, TextRow};
pub use shell::{Prompter, Shell};
