//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`KeyValueStore`]: the persistence substrate. A flat string-keyed store
//!   with `get`/`set`/`remove`, the same shape as browser local storage.
//! - [`record_store::RecordStore`]: the authoritative in-memory list of
//!   student records, kept equal to the snapshot in the substrate.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per key: `<key>.json` inside the data directory
//!   - Writes go to a temp file and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── students.json       # JSON array of student records
//! ├── isLoggedIn.json     # "true" while an admin session is active
//! └── config.json         # RollcallConfig
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod record_store;

pub use record_store::RecordStore;

/// Key holding the serialized record sequence.
pub const STUDENTS_KEY: &str = "students";

/// Key holding the admin session flag.
pub const SESSION_KEY: &str = "isLoggedIn";

/// Abstract interface for the key-value substrate.
///
/// Calls are synchronous: a `set` that returns `Ok` has been written.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
