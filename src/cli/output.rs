//! Output formatting for CLI commands

use serde::Serialize;

use crate::domain::{Customer, Driver, EditReport, Shipment, Summary, Vehicle};
pub use crate::storage::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints a warning that does not fail the command
    pub fn warn(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Warning: {}", message),
            OutputFormat::Json => {
                eprintln!("{}", serde_json::json!({ "warning": message }));
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                // For text format, we expect the caller to handle it
                // This is a fallback that pretty-prints JSON
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints records as a table (text) or an array (json)
    pub fn records<T: TextRow + Serialize>(&self, title: &str, records: &[T]) {
        if self.is_json() {
            self.data(&records);
        } else {
            print!("{}", table(title, records));
        }
    }

    /// Prints a single record
    pub fn record<T: TextRow + Serialize>(&self, record: &T) {
        if self.is_json() {
            self.data(record);
        } else {
            print!("{}", record.detail());
        }
    }

    /// Reports rejected fields from an edit as warnings
    pub fn edit_report(&self, report: &EditReport) {
        for rejected in &report.rejected {
            self.warn(&format!(
                "{} '{}' is not valid, keeping the previous value",
                rejected.field, rejected.value
            ));
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

/// Records that render as one line of a text table
pub trait TextRow {
    /// Column header line
    fn header() -> String;

    /// One table row
    fn row(&self) -> String;

    /// Multi-line `field: value` view
    fn detail(&self) -> String;
}

const RULE_WIDTH: usize = 60;

/// Renders a titled table, or a notice when there is nothing to show
pub fn table<T: TextRow>(title: &str, records: &[T]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!("{}\n{}\n{}\n", rule, title, rule);
    if records.is_empty() {
        out.push_str("No records\n");
        return out;
    }
    out.push_str(&T::header());
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for record in records {
        out.push_str(&record.row());
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn detail(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{:<12} {}\n", format!("{}:", name), value))
        .collect()
}

impl TextRow for Customer {
    fn header() -> String {
        format!("{:<10} {:<20} {:<16} ADDRESS", "ID", "NAME", "PHONE")
    }

    fn row(&self) -> String {
        format!("{:<10} {:<20} {:<16} {}", self.id, self.name, self.phone, self.address)
    }

    fn detail(&self) -> String {
        detail(&[
            ("ID", self.id.clone()),
            ("Name", self.name.clone()),
            ("Phone", self.phone.clone()),
            ("Address", self.address.clone()),
        ])
    }
}

impl TextRow for Driver {
    fn header() -> String {
        format!("{:<10} {:<20} {:<16} LICENSE", "ID", "NAME", "PHONE")
    }

    fn row(&self) -> String {
        format!("{:<10} {:<20} {:<16} {}", self.id, self.name, self.phone, self.license)
    }

    fn detail(&self) -> String {
        detail(&[
            ("ID", self.id.clone()),
            ("Name", self.name.clone()),
            ("Phone", self.phone.clone()),
            ("License", self.license.clone()),
        ])
    }
}

impl TextRow for Vehicle {
    fn header() -> String {
        format!("{:<10} {:<14} {:<12} CAPACITY (kg)", "ID", "PLATE", "TYPE")
    }

    fn row(&self) -> String {
        format!(
            "{:<10} {:<14} {:<12} {}",
            self.id, self.plate, self.vehicle_type, self.capacity_kg
        )
    }

    fn detail(&self) -> String {
        detail(&[
            ("ID", self.id.clone()),
            ("Plate", self.plate.clone()),
            ("Type", self.vehicle_type.clone()),
            ("Capacity", format!("{} kg", self.capacity_kg)),
        ])
    }
}

impl TextRow for Shipment {
    fn header() -> String {
        format!(
            "{:<8} {:<8} {:<8} {:<8} {:<24} {:>10} {:<11} CREATED",
            "ID", "CUST", "DRIVER", "VEHICLE", "ROUTE", "PRICE", "STATUS"
        )
    }

    fn row(&self) -> String {
        format!(
            "{:<8} {:<8} {:<8} {:<8} {:<24} {:>10.2} {:<11} {}",
            self.id,
            self.customer_id,
            self.driver_id,
            self.vehicle_id,
            format!("{} -> {}", self.origin, self.destination),
            self.price_usd,
            self.status,
            self.created_at
        )
    }

    fn detail(&self) -> String {
        detail(&[
            ("ID", self.id.clone()),
            ("Customer", self.customer_id.clone()),
            ("Driver", self.driver_id.clone()),
            ("Vehicle", self.vehicle_id.clone()),
            ("Origin", self.origin.clone()),
            ("Destination", self.destination.clone()),
            ("Weight", format!("{} kg", self.weight_kg)),
            ("Price", format!("${:.2}", self.price_usd)),
            ("Status", self.status.to_string()),
            ("Created", self.created_at.clone()),
        ])
    }
}

/// Renders the summary report
pub fn summary_text(summary: &Summary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\nREPORT SUMMARY\n{rule}\n\
         Total shipments : {}\n\
         Delivered       : {}\n\
         In Transit      : {}\n\
         Pending         : {}\n\
         Cancelled       : {}\n\
         Total income($) : {:.2}\n\
         {rule}\n",
        summary.total_shipments,
        summary.delivered,
        summary.in_transit,
        summary.pending,
        summary.cancelled,
        summary.total_income,
        rule = rule
    )
}
