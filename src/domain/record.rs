//! Shared record plumbing
//!
//! Every collection in the dataset holds records keyed by a string `id`.
//! [`Record`] gives uniform access to a record's identifier and to the
//! collection it lives in, so lookup, insert and removal are written once.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Dataset, RecordError};

/// The four record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customer,
    Driver,
    Vehicle,
    Shipment,
}

impl EntityKind {
    /// Returns the lowercase label used in messages and search fields
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Driver => "driver",
            EntityKind::Vehicle => "vehicle",
            EntityKind::Shipment => "shipment",
        }
    }

    /// Returns the capitalized label used at the start of messages
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Customer => "Customer",
            EntityKind::Driver => "Driver",
            EntityKind::Vehicle => "Vehicle",
            EntityKind::Shipment => "Shipment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.title())
    }
}

/// A record stored in one of the dataset's collections
pub trait Record: Clone + Serialize {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn collection(data: &Dataset) -> &[Self];

    fn collection_mut(data: &mut Dataset) -> &mut Vec<Self>;
}

/// A record that supports field-level edits through a patch
pub trait Editable: Record {
    type Patch;

    /// Applies every non-blank field of the patch, returning what changed
    fn apply(&mut self, patch: &Self::Patch) -> EditReport;
}

/// A patch value that could not be applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedField {
    pub field: &'static str,
    pub value: String,
}

/// Outcome of applying a patch to a record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditReport {
    /// Fields whose value actually differs after the edit
    pub changed: Vec<&'static str>,

    /// Fields that were provided but rejected; their prior value is kept
    pub rejected: Vec<RejectedField>,
}

impl EditReport {
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }

    pub(crate) fn set_text(&mut self, field: &'static str, target: &mut String, value: Option<&str>) {
        if let Some(value) = non_blank(value) {
            if *target != value {
                *target = value.to_string();
                self.changed.push(field);
            }
        }
    }

    pub(crate) fn reject(&mut self, field: &'static str, value: &str) {
        self.rejected.push(RejectedField {
            field,
            value: value.to_string(),
        });
    }
}

/// Trims the value and treats blank text as absent
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validates a required text field
pub(crate) fn required(field: &'static str, value: impl Into<String>) -> Result<String, RecordError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordError::invalid(field, value));
    }
    Ok(trimmed.to_string())
}

/// Validates a quantity (weight, capacity, price): finite and not negative
pub(crate) fn quantity(field: &'static str, value: f64) -> Result<f64, RecordError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RecordError::invalid(field, value.to_string()))
    }
}

/// Parses user text as a quantity
pub fn parse_quantity(field: &'static str, text: &str) -> Result<f64, RecordError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| RecordError::invalid(field, text))?;
    quantity(field, value).map_err(|_| RecordError::invalid(field, text))
}
