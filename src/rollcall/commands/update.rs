use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::model::StudentDraft;
use crate::store::{KeyValueStore, RecordStore};
use crate::validate::{validate_draft, ValidationMode};
use tracing::{debug, info};

use super::helpers::require_record;

pub fn run<S: KeyValueStore, C: AsRef<str>>(
    store: &mut RecordStore<S>,
    id: i64,
    draft: &StudentDraft,
    courses: &[C],
    mode: ValidationMode,
) -> Result<CmdResult> {
    require_record(store.records(), id)?;

    let valid = validate_draft(draft, courses, mode).map_err(|errors| {
        debug!(id, %errors, "update rejected");
        RollcallError::Validation(errors)
    })?;

    let mut records = store.records().to_vec();
    let mut updated = Vec::new();
    for record in records.iter_mut().filter(|r| r.id == id) {
        record.apply(valid.clone());
        updated.push(record.clone());
    }
    store.replace_all(records)?;

    info!(id, count = updated.len(), "student updated");
    let mut result = CmdResult::default().with_affected_records(updated);
    result.add_message(CmdMessage::success("Student record updated successfully!"));
    Ok(result)
}
