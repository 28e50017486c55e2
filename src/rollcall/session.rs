//! The admin session flag.
//!
//! This is a gate, not a security boundary: credentials are a fixed literal
//! pair compared for equality, nothing is hashed and nothing is rate limited.

use crate::error::Result;
use crate::store::{KeyValueStore, RecordStore, SESSION_KEY};
use tracing::info;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

const ACTIVE: &str = "true";

pub fn is_active<S: KeyValueStore>(store: &RecordStore<S>) -> bool {
    matches!(store.backend().get(SESSION_KEY), Ok(Some(v)) if v == ACTIVE)
}

/// Marks the session active and reloads the records when the credentials
/// match exactly. Returns `false` and changes nothing otherwise.
pub fn login<S: KeyValueStore>(
    store: &mut RecordStore<S>,
    username: &str,
    password: &str,
) -> Result<bool> {
    if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
        info!("rejected login attempt");
        return Ok(false);
    }
    store.backend_mut().set(SESSION_KEY, ACTIVE)?;
    store.load();
    info!("admin session started");
    Ok(true)
}

pub fn logout<S: KeyValueStore>(store: &mut RecordStore<S>) -> Result<()> {
    store.backend_mut().remove(SESSION_KEY)?;
    info!("admin session ended");
    Ok(())
}
