//! Customer records

use serde::{Deserialize, Serialize};

use super::record::{required, EditReport, Editable, EntityKind, Record};
use super::{Dataset, RecordError};

/// A customer who books shipments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    /// Creates a customer, rejecting blank fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            id: required("id", id)?,
            name: required("name", name)?,
            phone: required("phone", phone)?,
            address: required("address", address)?,
        })
    }
}

/// Field changes for a customer; `None` or blank keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Record for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(data: &Dataset) -> &[Self] {
        &data.customers
    }

    fn collection_mut(data: &mut Dataset) -> &mut Vec<Self> {
        &mut data.customers
    }
}

impl Editable for Customer {
    type Patch = CustomerPatch;

    fn apply(&mut self, patch: &CustomerPatch) -> EditReport {
        let mut report = EditReport::default();
        report.set_text("name", &mut self.name, patch.name.as_deref());
        report.set_text("phone", &mut self.phone, patch.phone.as_deref());
        report.set_text("address", &mut self.address, patch.address.as_deref());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer::new("C1", "Sok Dara", "012 345 678", "Phnom Penh").unwrap()
    }

    #[test]
    fn new_trims_fields() {
        let c = Customer::new(" C1 ", "Dara ", "1", "PP").unwrap();
        assert_eq!(c.id, "C1");
        assert_eq!(c.name, "Dara");
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Customer::new("C1", "", "1", "PP").unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { field: "name", .. }));
    }

    #[test]
    fn blank_patch_leaves_record_unchanged() {
        let mut c = sample();
        let before = c.clone();
        let report = c.apply(&CustomerPatch {
            name: Some(String::new()),
            phone: None,
            address: Some("  ".into()),
        });
        assert_eq!(c, before);
        assert!(report.is_unchanged());
    }

    #[test]
    fn single_field_patch_changes_only_that_field() {
        let mut c = sample();
        let report = c.apply(&CustomerPatch {
            phone: Some("099 000 111".into()),
            ..Default::default()
        });
        assert_eq!(report.changed, vec!["phone"]);
        assert_eq!(c.phone, "099 000 111");
        assert_eq!(c.name, "Sok Dara");
        assert_eq!(c.address, "Phnom Penh");
    }

    #[test]
    fn patch_with_current_values_is_unchanged() {
        let mut c = sample();
        let report = c.apply(&CustomerPatch {
            name: Some(" Sok Dara ".into()),
            phone: Some("012 345 678".into()),
            address: Some("Siem Reap".into()),
        });
        assert_eq!(report.changed, vec!["address"]);

        let report = c.apply(&CustomerPatch {
            address: Some("Siem Reap".into()),
            ..Default::default()
        });
        assert!(report.is_unchanged());
    }

    #[test]
    fn serializes_with_flat_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "C1");
        assert_eq!(json["address"], "Phnom Penh");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
