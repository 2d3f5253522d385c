//! Fleetdesk - record keeping for a small transport company

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = fleetdesk::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
