use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KeyValueStore, RecordStore};
use tracing::{debug, info};

pub const DELETED_MESSAGE: &str = "Student record deleted!";

/// Removes every record with `id`. An absent id is a no-op, not an error.
pub fn run<S: KeyValueStore>(store: &mut RecordStore<S>, id: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let (removed, kept): (Vec<_>, Vec<_>) =
        store.records().iter().cloned().partition(|r| r.id == id);

    if removed.is_empty() {
        debug!(id, "delete of unknown id ignored");
    } else {
        store.replace_all(kept)?;
        info!(id, count = removed.len(), "student deleted");
        result.affected_records = removed;
    }

    result.add_message(CmdMessage::info(DELETED_MESSAGE));
    Ok(result)
}
