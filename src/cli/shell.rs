//! Interactive numbered-menu shell
//!
//! Mirrors the command tree as nested menus. Required prompts re-ask until
//! they get a value, numeric prompts until they get a number. Record errors
//! are printed and the menu carries on; end of input leaves the shell.

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;

use super::output::{summary_text, table, TextRow};
use crate::desk::{Desk, Roster};
use crate::domain::{
    parse_quantity, Customer, CustomerPatch, Driver, DriverPatch, EntityKind, NewShipment,
    Record, RecordError, Shipment, ShipmentStatus, Vehicle, VehiclePatch,
};
use crate::storage::DatasetStore;

#[derive(Debug, Error)]
#[error("end of input")]
struct EndOfInput;

/// Line-oriented prompts over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Reads one trimmed line
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer is not blank
    pub fn required(&mut self, label: &str) -> Result<String> {
        loop {
            let answer = self.ask(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.out, "Value cannot be empty")?;
        }
    }

    /// Asks until the answer is a non-negative number
    pub fn quantity(&mut self, label: &str, field: &'static str) -> Result<f64> {
        loop {
            let answer = self.ask(label)?;
            match parse_quantity(field, &answer) {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "Please enter a valid number")?,
            }
        }
    }

    /// Blank answers mean "keep the current value"
    pub fn optional(&mut self, label: &str) -> Result<Option<String>> {
        let answer = self.ask(label)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

/// Records the shell can create and edit through prompts
trait Form: Roster + TextRow {
    /// Plural menu title
    const TITLE: &'static str;

    fn read_new<R: BufRead, W: Write>(io: &mut Prompter<R, W>, id: String) -> Result<Self>;

    fn read_patch<R: BufRead, W: Write>(io: &mut Prompter<R, W>) -> Result<Self::Patch>;
}

impl Form for Customer {
    const TITLE: &'static str = "Customers";

    fn read_new<R: BufRead, W: Write>(io: &mut Prompter<R, W>, id: String) -> Result<Self> {
        let name = io.required("Name: ")?;
        let phone = io.required("Phone: ")?;
        let address = io.required("Address: ")?;
        Ok(Customer::new(id, name, phone, address)?)
    }

    fn read_patch<R: BufRead, W: Write>(io: &mut Prompter<R, W>) -> Result<CustomerPatch> {
        Ok(CustomerPatch {
            name: io.optional("New Name: ")?,
            phone: io.optional("New Phone: ")?,
            address: io.optional("New Address: ")?,
        })
    }
}

impl Form for Driver {
    const TITLE: &'static str = "Drivers";

    fn read_new<R: BufRead, W: Write>(io: &mut Prompter<R, W>, id: String) -> Result<Self> {
        let name = io.required("Name: ")?;
        let phone = io.required("Phone: ")?;
        let license = io.required("License No: ")?;
        Ok(Driver::new(id, name, phone, license)?)
    }

    fn read_patch<R: BufRead, W: Write>(io: &mut Prompter<R, W>) -> Result<DriverPatch> {
        Ok(DriverPatch {
            name: io.optional("New Name: ")?,
            phone: io.optional("New Phone: ")?,
            license: io.optional("New License No: ")?,
        })
    }
}

impl Form for Vehicle {
    const TITLE: &'static str = "Vehicles";

    fn read_new<R: BufRead, W: Write>(io: &mut Prompter<R, W>, id: String) -> Result<Self> {
        let plate = io.required("Plate Number: ")?;
        let vehicle_type = io.required("Vehicle Type (truck/van/...): ")?;
        let capacity = io.quantity("Capacity (kg): ", "capacity_kg")?;
        Ok(Vehicle::new(id, plate, vehicle_type, capacity)?)
    }

    fn read_patch<R: BufRead, W: Write>(io: &mut Prompter<R, W>) -> Result<VehiclePatch> {
        Ok(VehiclePatch {
            plate: io.optional("New Plate: ")?,
            vehicle_type: io.optional("New Type: ")?,
            capacity_kg: io.optional("New Capacity (kg): ")?,
        })
    }
}

/// The interactive shell bound to a desk
pub struct Shell<'a, S: DatasetStore, R, W> {
    desk: &'a mut Desk<S>,
    io: Prompter<R, W>,
}

impl<'a, S: DatasetStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(desk: &'a mut Desk<S>, input: R, out: W) -> Self {
        Self {
            desk,
            io: Prompter::new(input, out),
        }
    }

    /// Runs the main menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(e) if e.is::<EndOfInput>() => Ok(()),
            other => other,
        }
    }

    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    fn main_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(60);
        loop {
            self.io.say(&format!(
                "\n{rule}\nTRANSPORT COMPANY INFORMATION SYSTEM\n{rule}\n\
                 1) Customers\n2) Drivers\n3) Vehicles\n4) Shipments / Orders\n\
                 5) Report Summary\n0) Exit",
                rule = rule
            ))?;

            match self.io.ask("Choose: ")?.as_str() {
                "1" => self.roster_menu::<Customer>()?,
                "2" => self.roster_menu::<Driver>()?,
                "3" => self.roster_menu::<Vehicle>()?,
                "4" => self.shipment_menu()?,
                "5" => {
                    let text = summary_text(&self.desk.summary());
                    self.io.say(text.trim_end())?;
                }
                "0" => {
                    self.io.say("Bye!")?;
                    return Ok(());
                }
                _ => self.io.say("Invalid choice")?,
            }
        }
    }

    fn roster_menu<T: Form>(&mut self) -> Result<()> {
        let kind = T::KIND;
        loop {
            self.io.say(&format!(
                "\n--- {title} Menu ---\n1) Add {kind}\n2) View {title}\n3) Edit {kind}\n\
                 4) Delete {kind}\n0) Back",
                title = T::TITLE,
                kind = kind
            ))?;

            let result = match self.io.ask("Choose: ")?.as_str() {
                "1" => self.add::<T>(),
                "2" => self.view::<T>(T::TITLE),
                "3" => self.edit::<T>(),
                "4" => self.delete::<T>(),
                "0" => return Ok(()),
                _ => {
                    self.io.say("Invalid choice")?;
                    continue;
                }
            };
            self.settle(result)?;
        }
    }

    fn shipment_menu(&mut self) -> Result<()> {
        loop {
            self.io.say(
                "\n--- Shipments Menu ---\n1) Create Shipment\n2) View Shipments\n\
                 3) Update Shipment Status\n4) Search Shipments\n0) Back",
            )?;

            let result = match self.io.ask("Choose: ")?.as_str() {
                "1" => self.create_shipment(),
                "2" => self.view::<Shipment>("Shipments / Orders"),
                "3" => self.update_status(),
                "4" => self.search(),
                "0" => return Ok(()),
                _ => {
                    self.io.say("Invalid choice")?;
                    continue;
                }
            };
            self.settle(result)?;
        }
    }

    /// Prints recoverable errors; passes end of input and I/O failures up
    fn settle(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.is::<EndOfInput>() || e.is::<std::io::Error>() => Err(e),
            Err(e) => self.io.say(&format!("Error: {:#}", e)),
        }
    }

    fn view<T: Record + TextRow>(&mut self, title: &str) -> Result<()> {
        let text = table(title, self.desk.list::<T>());
        self.io.say(text.trim_end())
    }

    fn add<T: Form>(&mut self) -> Result<()> {
        let id = self.io.required(&format!("{} ID: ", T::KIND))?;
        if self.desk.find::<T>(&id).is_some() {
            return Err(RecordError::DuplicateId { kind: T::KIND, id }.into());
        }

        let record = T::read_new(&mut self.io, id.clone())?;
        self.desk.add(record)?;
        self.io.say(&format!("Added {} {}", T::KIND.as_str(), id))
    }

    fn edit<T: Form>(&mut self) -> Result<()> {
        let id = self.io.required(&format!("Enter {} ID to edit: ", T::KIND))?;
        self.require::<T>(&id)?;

        self.io.say("Press Enter to keep the current value")?;
        let patch = T::read_patch(&mut self.io)?;
        let report = self.desk.edit::<T>(&id, &patch)?;

        for rejected in &report.rejected {
            self.io.say(&format!(
                "{} '{}' is not valid, keeping the previous value",
                rejected.field, rejected.value
            ))?;
        }
        self.io.say(&format!("Updated {} {}", T::KIND.as_str(), id))
    }

    fn delete<T: Form>(&mut self) -> Result<()> {
        let id = self.io.required(&format!("Enter {} ID to delete: ", T::KIND))?;
        self.desk.remove::<T>(&id)?;
        self.io.say(&format!("Removed {} {}", T::KIND.as_str(), id))
    }

    fn create_shipment(&mut self) -> Result<()> {
        let id = self.io.required("Shipment ID: ")?;
        if self.desk.find::<Shipment>(&id).is_some() {
            return Err(RecordError::DuplicateId {
                kind: EntityKind::Shipment,
                id,
            }
            .into());
        }

        let customer_id = self.io.required("Customer ID: ")?;
        self.reference::<Customer>(&customer_id)?;
        let driver_id = self.io.required("Driver ID: ")?;
        self.reference::<Driver>(&driver_id)?;
        let vehicle_id = self.io.required("Vehicle ID: ")?;
        self.reference::<Vehicle>(&vehicle_id)?;

        let input = NewShipment {
            id,
            customer_id,
            driver_id,
            vehicle_id,
            origin: self.io.required("From (Origin): ")?,
            destination: self.io.required("To (Destination): ")?,
            weight_kg: self.io.quantity("Weight (kg): ", "weight_kg")?,
            price_usd: self.io.quantity("Price ($): ", "price_usd")?,
        };

        let shipment = self.desk.create_shipment(input)?;
        self.io.say(&format!(
            "Created shipment {} at {}",
            shipment.id, shipment.created_at
        ))
    }

    fn update_status(&mut self) -> Result<()> {
        let id = self.io.required("Enter Shipment ID: ")?;
        self.require::<Shipment>(&id)?;

        let options: Vec<String> = ShipmentStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, status)| format!("{}) {}", i + 1, status))
            .collect();
        self.io.say(&options.join("\n"))?;

        let choice = self.io.required("Choose new status: ")?;
        let shipment = self.desk.update_status(&id, &choice)?;
        self.io.say(&format!("Shipment {} is now {}", shipment.id, shipment.status))
    }

    fn search(&mut self) -> Result<()> {
        let field = self
            .io
            .required("Search by (id/customer/driver/vehicle/status): ")?;
        let value = self.io.required("Value: ")?;

        let results: Vec<Shipment> = self
            .desk
            .search_shipments(&field, &value)
            .into_iter()
            .cloned()
            .collect();
        let text = table("Search Results (Shipments)", &results);
        self.io.say(text.trim_end())
    }

    fn require<T: Record>(&self, id: &str) -> Result<(), RecordError> {
        match self.desk.find::<T>(id) {
            Some(_) => Ok(()),
            None => Err(RecordError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            }),
        }
    }

    fn reference<T: Record>(&self, id: &str) -> Result<(), RecordError> {
        match self.desk.find::<T>(id) {
            Some(_) => Ok(()),
            None => Err(RecordError::UnknownReference {
                kind: T::KIND,
                id: id.to_string(),
            }),
        }
    }
}
