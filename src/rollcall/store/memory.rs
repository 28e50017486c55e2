use super::KeyValueStore;
use crate::error::{Result, RollcallError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(RollcallError::Store("Simulated write error".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(RollcallError::Store("Simulated write error".to_string()));
        }
        self.entries.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::default_courses;
    use crate::model::StudentDraft;
    use crate::store::{RecordStore, SESSION_KEY};
    use crate::validate::{validate_draft, ValidationMode};

    /// A draft that passes every validator.
    pub fn valid_draft(roll_no: &str, name: &str, email: &str) -> StudentDraft {
        StudentDraft {
            roll_no: roll_no.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
            course: "Computer Science".to_string(),
            address: String::new(),
        }
    }

    pub struct StoreFixture {
        pub store: RecordStore<InMemoryStore>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecordStore::new(InMemoryStore::new()),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let roll_no = format!("RN{:04}", i + 1);
                // Names can't carry digits, so number them with letters
                let letter = (b'a' + (i % 26) as u8) as char;
                let name = format!("Student {}", letter);
                let email = format!("student{}@example.com", i + 1);
                self = self.with_student(valid_draft(&roll_no, &name, &email));
            }
            self
        }

        pub fn with_student(mut self, draft: StudentDraft) -> Self {
            let valid = validate_draft(&draft, &default_courses(), ValidationMode::Full).unwrap();
            let id = self.store.next_id();
            let mut records = self.store.records().to_vec();
            records.push(crate::model::StudentRecord::from_valid(id, valid));
            self.store.replace_all(records).unwrap();
            self
        }

        pub fn logged_in(mut self) -> Self {
            self.store.backend_mut().set(SESSION_KEY, "true").unwrap();
            self
        }
    }
}
