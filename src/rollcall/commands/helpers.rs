use crate::error::{Result, RollcallError};
use crate::model::StudentRecord;

pub fn require_record(records: &[StudentRecord], id: i64) -> Result<&StudentRecord> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or(RollcallError::StudentNotFound(id))
}
