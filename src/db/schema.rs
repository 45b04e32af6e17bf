//! SQL DDL for the intake store.
//!
//! Both tables are created only when absent, so an existing database file
//! from an earlier deployment is picked up as-is. There are no migrations.

/// SQLite schema with:
/// - `inquiries`: contact-form leads, never updated or deleted
/// - `subscribers`: newsletter addresses, `email` UNIQUE
/// - `created_at` defaults to `CURRENT_TIMESTAMP`; the server binds it explicitly
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS inquiries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT,
    service TEXT,
    message TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS subscribers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT UNIQUE,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;
