//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the `IntakeStorage` handle shared by request handlers

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbInquiry, DbSubscriber, SubscribeOutcome};
pub use schema::SQLITE_INIT;
pub use sqlite::{IntakeStorage, SqlitePool};
