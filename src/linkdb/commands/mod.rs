//! # Command Layer
//!
//! Each command is a plain function over a [`DataStore`](crate::store::DataStore):
//! load the database, do the work, save if anything changed, and describe the
//! outcome in a [`CmdResult`]. Commands never print; the CLI decides how to
//! render messages and listed links.
//!
//! Link ids are only meaningful against the database they were read from. The
//! persisted form carries no ids, so ids are reassigned densely (from 0, in
//! file order) every time the store is loaded.

use crate::config::LinkDbConfig;
use crate::model::{EntryId, LinkEntry};
use crate::store::LinkDatabase;

pub mod add;
pub mod attributes;
pub mod config;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod search;
pub mod tagging;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A snapshot of one entry together with its id, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedLink {
    pub id: EntryId,
    pub entry: LinkEntry,
}

impl ListedLink {
    /// Snapshots `ids` from `db` in the given order, skipping unknown ids.
    pub fn collect(db: &LinkDatabase, ids: &[EntryId]) -> Vec<ListedLink> {
        ids.iter()
            .filter_map(|id| {
                db.get(*id).map(|entry| ListedLink {
                    id: *id,
                    entry: entry.borrow().clone(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_ids: Vec<EntryId>,
    pub listed_links: Vec<ListedLink>,
    pub config: Option<LinkDbConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_ids(mut self, ids: Vec<EntryId>) -> Self {
        self.affected_ids = ids;
        self
    }

    pub fn with_listed_links(mut self, links: Vec<ListedLink>) -> Self {
        self.listed_links = links;
        self
    }

    pub fn with_config(mut self, config: LinkDbConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Display label for a link: its name, or its location when unnamed.
pub(crate) fn label(entry: &LinkEntry) -> &str {
    if entry.name().is_empty() {
        if entry.location().is_empty() {
            "(empty link)"
        } else {
            entry.location()
        }
    } else {
        entry.name()
    }
}
