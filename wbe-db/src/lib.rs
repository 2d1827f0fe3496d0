//! In-memory SQLite database layer for World Bank indicator data.
//!
//! This crate provides a shared database abstraction that loads CSV data
//! into an in-memory SQLite database and exposes typed query methods for
//! consumption by Dioxus/D3.js chart applications compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in consuming crates
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! The database is populated once at startup and treated as read-only
//! afterwards; every user interaction re-runs queries against the same
//! immutable table contents.
//!
//! # Usage
//!
//! ```rust
//! use wbe_db::Database;
//!
//! let db = Database::new().unwrap();
//!
//! // Load CSV data (typically via include_str! in the consuming crate)
//! db.load_countries("ISO3,ISO2,NAME,REGION,INCOME_LEVEL\nNOR,NO,Norway,Europe & Central Asia,High income\n").unwrap();
//! db.load_observations("Norway,2000,3.09\n").unwrap();
//!
//! // Query typed results
//! let countries = db.query_countries().unwrap();
//! let series = db.query_indicator_series(&["Norway".to_string()]).unwrap();
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `countries` - Country metadata (name, ISO codes, region, income level)
//! - `observations` - Annual indicator values, one row per (country, year)

pub mod schema;
mod loader;
mod queries;
pub mod figure;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping indicator observations and country
/// metadata.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use wbe_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_countries("ISO3,ISO2,NAME,REGION,INCOME_LEVEL\nNOR,NO,Norway,Europe & Central Asia,High income\n").unwrap();
/// db.load_observations("Norway,2000,3.09\n").unwrap();
/// let countries = db.query_countries().unwrap();
/// assert_eq!(countries.len(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        // Both should reference the same underlying connection
        db.load_countries(
            "ISO3,ISO2,NAME,REGION,INCOME_LEVEL\nNOR,NO,Norway,Europe & Central Asia,High income\n",
        )
        .unwrap();
        db.load_observations("Norway,2000,3.09\n").unwrap();
        let countries = db2.query_countries().unwrap();
        assert_eq!(countries.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let countries = db.query_countries().unwrap();
        assert!(countries.is_empty(), "New database should have no countries");
    }
}
