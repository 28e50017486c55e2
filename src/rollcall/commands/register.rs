use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::model::{StudentDraft, StudentRecord};
use crate::store::{KeyValueStore, RecordStore};
use crate::validate::{validate_draft, ValidationMode};
use tracing::{debug, info};

pub fn run<S: KeyValueStore, C: AsRef<str>>(
    store: &mut RecordStore<S>,
    draft: &StudentDraft,
    courses: &[C],
) -> Result<CmdResult> {
    let valid = validate_draft(draft, courses, ValidationMode::Full).map_err(|errors| {
        debug!(%errors, "register rejected");
        RollcallError::Validation(errors)
    })?;

    let record = StudentRecord::from_valid(store.next_id(), valid);
    let mut records = store.records().to_vec();
    records.push(record.clone());
    store.replace_all(records)?;

    info!(id = record.id, roll_no = %record.roll_no, "student registered");
    let mut result = CmdResult::default().with_affected_records(vec![record]);
    result.add_message(CmdMessage::success("Student registered successfully!"));
    Ok(result)
}
