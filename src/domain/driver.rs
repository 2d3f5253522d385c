//! Driver records

use serde::{Deserialize, Serialize};

use super::record::{required, EditReport, Editable, EntityKind, Record};
use super::{Dataset, RecordError};

/// A driver who can be assigned to shipments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Driving license number
    pub license: String,
}

impl Driver {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        license: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            id: required("id", id)?,
            name: required("name", name)?,
            phone: required("phone", phone)?,
            license: required("license", license)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub license: Option<String>,
}

impl Record for Driver {
    const KIND: EntityKind = EntityKind::Driver;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &Dataset) -> &[Self] {
        &data.drivers
    }

    fn collection_mut(data: &mut Dataset) -> &mut Vec<Self> {
        &mut data.drivers
    }
}

impl Editable for Driver {
    type Patch = DriverPatch;

    fn apply(&mut self, patch: &DriverPatch) -> EditReport {
        let mut report = EditReport::default();
        report.set_text("name", &mut self.name, patch.name.as_deref());
        report.set_text("phone", &mut self.phone, patch.phone.as_deref());
        report.set_text("license", &mut self.license, patch.license.as_deref());
        report
    }
}
