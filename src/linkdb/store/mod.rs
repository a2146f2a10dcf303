//! # Storage Layer
//!
//! [`LinkDatabase`] is the in-memory owner of every link. This module also
//! defines how a database is persisted, behind the [`DataStore`] trait, so the
//! command layer never cares where the bytes live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   (`links.json` by default) inside a data directory.
//! - [`memory::InMemoryStore`]: Keeps the encoded JSON in memory for tests.
//!
//! Both go through the same codec ([`json`]), so a test against
//! `InMemoryStore` exercises exactly the encoding that lands on disk.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── links.json      # { "links": [ ... ] }
//! └── config.json     # LinkDbConfig
//! ```

use crate::error::Result;

pub mod database;
pub mod fs;
pub mod json;
pub mod memory;

pub use database::{EntryHandle, LinkDatabase, SubscriptionId};

/// Abstract interface for link persistence.
pub trait DataStore {
    /// Load the whole database. A store that has never been saved loads as
    /// an empty database.
    fn load(&self) -> Result<LinkDatabase>;

    /// Replace the persisted database with `db`.
    fn save(&mut self, db: &LinkDatabase) -> Result<()>;
}
