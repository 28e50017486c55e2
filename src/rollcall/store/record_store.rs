//! The authoritative list of student records.
//!
//! `RecordStore` keeps an ordered `Vec<StudentRecord>` in memory and mirrors it
//! to the [`KeyValueStore`] under [`STUDENTS_KEY`]. [`RecordStore::replace_all`]
//! is the only mutation primitive: register, update and delete all compute a
//! new sequence and hand it over whole.

use super::{KeyValueStore, STUDENTS_KEY};
use crate::error::Result;
use crate::model::StudentRecord;
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, warn};

pub struct RecordStore<S: KeyValueStore> {
    backend: S,
    records: Vec<StudentRecord>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Wraps a backend without reading from it. Call [`load`](Self::load) to rehydrate.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    /// Reads the persisted snapshot into memory and returns it.
    ///
    /// A missing, unreadable or malformed snapshot loads as an empty list.
    pub fn load(&mut self) -> Vec<StudentRecord> {
        self.records = match self.backend.get(STUDENTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<StudentRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, "discarding malformed student snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read student snapshot");
                Vec::new()
            }
        };
        debug!(count = self.records.len(), "loaded student records");
        self.records.clone()
    }

    /// Replaces the whole sequence and persists it with a single write.
    ///
    /// The in-memory list only changes once the backend accepted the write.
    pub fn replace_all(&mut self, records: Vec<StudentRecord>) -> Result<()> {
        let serialized = serde_json::to_string(&records)?;
        self.backend.set(STUDENTS_KEY, &serialized)?;
        debug!(count = records.len(), "persisted student records");
        self.records = records;
        Ok(())
    }

    /// An id distinct from every live record's id.
    pub fn next_id(&self) -> i64 {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Millisecond timestamp ids, bumped past the largest live id when the
    /// clock has not moved on.
    pub fn next_id_at(&self, now_millis: i64) -> i64 {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) if max >= now_millis => match max.checked_add(1) {
                Some(next) => next,
                None => self.free_id_below(max),
            },
            _ => now_millis,
        }
    }

    /// Highest id at or below `top` that no live record holds.
    fn free_id_below(&self, top: i64) -> i64 {
        let taken: HashSet<i64> = self.records.iter().map(|r| r.id).collect();
        let mut candidate = top;
        while taken.contains(&candidate) {
            candidate -= 1;
        }
        warn!(id = candidate, "id space exhausted above the largest id, reusing a gap");
        candidate
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn find(&self, id: i64) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
