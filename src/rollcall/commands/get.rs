use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{KeyValueStore, RecordStore};

use super::helpers::require_record;

pub fn run<S: KeyValueStore>(store: &RecordStore<S>, id: i64) -> Result<CmdResult> {
    let record = require_record(store.records(), id)?.clone();
    Ok(CmdResult::default().with_listed_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcallError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_single_record() {
        let store = StoreFixture::new().with_students(2).store;
        let id = store.records()[1].id;
        let result = run(&store, id).unwrap();
        assert_eq!(result.listed_records, vec![store.records()[1].clone()]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = StoreFixture::new().store;
        assert!(matches!(
            run(&store, 7),
            Err(RollcallError::StudentNotFound(7))
        ));
    }
}
