//! # Rollcall Architecture
//!
//! Rollcall is a **UI-agnostic student records library**. The terminal client shipped
//! with it is one possible view layer; the core could just as well sit behind a web
//! page or a desktop form.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, applies live-input filters             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Gates commands on the admin session                      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + validate.rs                │
//! │  - Validates drafts, mutates the record store               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: in-memory list + load/replace_all           │
//! │  - KeyValueStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Drafts and Records
//!
//! User input arrives as a [`model::StudentDraft`] of raw strings. The only way to
//! turn a draft into a [`model::StudentRecord`] is through
//! [`validate::validate_draft`], which hands back a [`model::ValidDraft`] on success
//! or a per-field [`model::FieldErrors`] map on failure.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`validate`]: Field validators shared by register and update
//! - [`filter`]: Live-input filters for keystroke-style callers
//! - [`session`]: Admin login flag
//! - [`store`]: Record store and key-value substrates
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;
pub mod validate;
