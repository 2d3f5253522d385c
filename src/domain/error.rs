//! Errors raised by record validation and dataset operations

use thiserror::Error;

use super::EntityKind;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("{kind} ID '{id}' already exists")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} ID '{id}' does not exist")]
    UnknownReference { kind: EntityKind, id: String },

    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

impl RecordError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        RecordError::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Returns the referenced entity kind for `UnknownReference` errors
    pub fn unknown_reference(&self) -> Option<EntityKind> {
        match self {
            RecordError::UnknownReference { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
