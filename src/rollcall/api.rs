//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every rollcall operation, whichever view sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`RecordStore`]; views only ever see cloned snapshots
//! - **Gates** record commands on an active admin session
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no validation rules and performs no terminal I/O.
//!
//! ## Generic Over KeyValueStore
//!
//! `RollcallApi<S: KeyValueStore>` is generic over the substrate:
//! - Production: `RollcallApi<FileStore>`
//! - Testing: `RollcallApi<InMemoryStore>`

use crate::commands;
use crate::config::RollcallConfig;
use crate::error::{Result, RollcallError};
use crate::model::{StudentDraft, StudentRecord};
use crate::session;
use crate::store::{KeyValueStore, RecordStore};
use std::path::PathBuf;

pub struct RollcallApi<S: KeyValueStore> {
    store: RecordStore<S>,
    config: RollcallConfig,
    config_dir: Option<PathBuf>,
}

impl<S: KeyValueStore> RollcallApi<S> {
    /// Wraps a substrate. Records are rehydrated when a session is already active.
    pub fn new(backend: S, config: RollcallConfig) -> Self {
        let mut store = RecordStore::new(backend);
        if session::is_active(&store) {
            store.load();
        }
        Self {
            store,
            config,
            config_dir: None,
        }
    }

    /// Directory the `config` command reads and writes.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn is_logged_in(&self) -> bool {
        session::is_active(&self.store)
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        session::login(&mut self.store, username, password)
    }

    pub fn logout(&mut self) -> Result<()> {
        session::logout(&mut self.store)
    }

    /// Re-reads the persisted snapshot.
    pub fn load(&mut self) -> Result<Vec<StudentRecord>> {
        self.require_session()?;
        Ok(self.store.load())
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        self.require_session()?;
        Ok(commands::list::run(&self.store))
    }

    pub fn search_students(&self, query: &str) -> Result<commands::CmdResult> {
        self.require_session()?;
        Ok(commands::search::run(self.store.records(), query))
    }

    pub fn get_student(&self, id: i64) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::get::run(&self.store, id)
    }

    pub fn register_student(&mut self, draft: &StudentDraft) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::register::run(&mut self.store, draft, &self.config.courses)
    }

    pub fn update_student(
        &mut self,
        id: i64,
        draft: &StudentDraft,
    ) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::update::run(
            &mut self.store,
            id,
            draft,
            &self.config.courses,
            self.config.update_mode(),
        )
    }

    pub fn delete_student(&mut self, id: i64) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn courses(&self) -> &[String] {
        &self.config.courses
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let dir = self
            .config_dir
            .clone()
            .ok_or_else(|| RollcallError::Api("No config directory configured".to_string()))?;
        let result = commands::config::run(&dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    fn require_session(&self) -> Result<()> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(RollcallError::NotLoggedIn)
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
