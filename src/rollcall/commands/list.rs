use crate::commands::CmdResult;
use crate::store::{KeyValueStore, RecordStore};

pub fn run<S: KeyValueStore>(store: &RecordStore<S>) -> CmdResult {
    CmdResult::default().with_listed_records(store.records().to_vec())
}
