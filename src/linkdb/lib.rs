//! # linkdb Architecture
//!
//! linkdb is an embeddable store of link records (a URL plus a name, a
//! description, tags and key/value attributes) with a composable query
//! language. The binary is one client of the library, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Commands (commands/*.rs)                    │
//! │  - Load, mutate, save; return CmdResult                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - model: LinkEntry, EntryId                                │
//! │  - query: Query algebra, ContainsQuery                      │
//! │  - store: LinkDatabase, JSON codec, DataStore backends      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Embedding
//!
//! The core needs none of the upper layers:
//!
//! ```
//! use linkdb::matcher::StringSearchOptions;
//! use linkdb::model::LinkEntry;
//! use linkdb::query::ContainsQuery;
//! use linkdb::store::LinkDatabase;
//!
//! let mut db = LinkDatabase::new();
//! db.add(LinkEntry::new("https://rust-lang.org").unwrap().with_tag("lang"));
//! db.add(LinkEntry::new("https://go.dev").unwrap());
//!
//! let query = ContainsQuery::new(["rust"], StringSearchOptions::partial());
//! assert_eq!(db.search(&query).len(), 1);
//! ```
//!
//! ## Threading
//!
//! Everything is single-threaded and synchronous. [`store::LinkDatabase`]
//! hands out `Rc<RefCell<_>>` handles, so it is neither `Send` nor `Sync`;
//! an embedding application that needs sharing wraps access itself.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`commands`]: Business logic for each command
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - [`matcher`]: Case/full-match aware string search
//! - [`model`]: Link entries and ids
//! - [`query`]: Query algebra
//! - [`store`]: The database, its codec, and storage backends

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod query;
pub mod store;
