//! Shared handlers for customer, driver and vehicle commands

use anyhow::Result;
use serde::Serialize;

use super::output::{Output, TextRow};
use crate::desk::{Desk, Roster};
use crate::domain::{Record, RecordError};
use crate::storage::DatasetStore;

/// Looks up a record or fails with `NotFound`
pub(super) fn require<'a, T: Record, S: DatasetStore>(desk: &'a Desk<S>, id: &str) -> Result<&'a T> {
    desk.find::<T>(id).ok_or_else(|| {
        RecordError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
        .into()
    })
}

pub(super) fn list<T, S>(desk: &Desk<S>, output: &Output, title: &str)
where
    T: Record + TextRow + Serialize,
    S: DatasetStore,
{
    let records = desk.list::<T>();
    output.verbose_ctx(T::KIND.as_str(), &format!("Listing {} records", records.len()));
    output.records(title, records);
}

pub(super) fn show<T, S>(desk: &Desk<S>, output: &Output, id: &str) -> Result<()>
where
    T: Record + TextRow + Serialize,
    S: DatasetStore,
{
    let record = require::<T, S>(desk, id)?;
    output.record(record);
    Ok(())
}

pub(super) fn add<T, S>(desk: &mut Desk<S>, output: &Output, record: T) -> Result<()>
where
    T: Roster + TextRow,
    S: DatasetStore,
{
    let id = record.id().to_string();
    desk.add(record)?;
    output.verbose_ctx(T::KIND.as_str(), &format!("Saved to {}", desk.store().location()));

    if output.is_json() {
        output.data(&require::<T, S>(desk, &id)?);
    } else {
        output.success(&format!("Added {} {}", T::KIND.as_str(), id));
    }
    Ok(())
}

pub(super) fn edit<T, S>(desk: &mut Desk<S>, output: &Output, id: &str, patch: &T::Patch) -> Result<()>
where
    T: Roster + TextRow,
    S: DatasetStore,
{
    let report = desk.edit::<T>(id, patch)?;
    output.verbose_ctx(
        T::KIND.as_str(),
        &format!("Changed fields: {:?}", report.changed),
    );
    output.edit_report(&report);

    if output.is_json() {
        output.data(&serde_json::json!({
            "record": require::<T, S>(desk, id)?,
            "changed": report.changed,
            "rejected": report.rejected,
        }));
    } else if report.is_unchanged() {
        output.success(&format!("No changes to {} {}", T::KIND.as_str(), id));
    } else {
        output.success(&format!("Updated {} {}", T::KIND.as_str(), id));
    }
    Ok(())
}

pub(super) fn remove<T, S>(desk: &mut Desk<S>, output: &Output, id: &str) -> Result<()>
where
    T: Roster + TextRow,
    S: DatasetStore,
{
    let removed = desk.remove::<T>(id)?;

    if output.is_json() {
        output.data(&removed);
    } else {
        output.success(&format!("Removed {} {}", T::KIND.as_str(), removed.id()));
    }
    Ok(())
}
