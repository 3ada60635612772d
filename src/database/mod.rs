//! QR Baghdad durable storage layer.
//!
//! Provides SQLite connection management and schema migrations for the
//! per-profile key-value store backing history and settings.
//!
//! # Usage
//!
//! ```no_run
//! use qr_baghdad::database::Database;
//!
//! // Open a persistent store
//! let db = Database::open("qr-baghdad.db").expect("failed to open database");
//!
//! // Or use an in-memory store for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Blobs round-trip exactly under their keys
//! db.set_value("qr-settings", "{}").unwrap();
//! assert_eq!(db.get_value("qr-settings").unwrap().as_deref(), Some("{}"));
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
