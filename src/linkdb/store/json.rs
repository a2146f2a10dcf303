//! JSON encoding of a [`LinkDatabase`].
//!
//! ```json
//! { "links": [ { "location": "https://gentoo.org",
//!                "name": "MyName",
//!                "description": "My description.",
//!                "tags": ["first tag", "second tag"],
//!                "attributes": { "ab": "12" } } ] }
//! ```
//!
//! Reading: every per-link field is optional and unknown fields are ignored,
//! but the top-level `links` array is required. Empty input, malformed JSON
//! and a missing `links` key are all [`LinkDbError::Format`].
//!
//! Writing: all five keys are always emitted, empty or not. Links are written
//! in ascending id order.
//!
//! Decoding builds the whole database before returning it; nothing is handed
//! back on failure. Ids are reassigned from 0 in file order.

use super::database::LinkDatabase;
use crate::error::{LinkDbError, Result};
use crate::model::LinkEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct DatabaseFile {
    links: Vec<LinkRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LinkRecord {
    #[serde(default)]
    location: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

impl LinkRecord {
    fn from_entry(entry: &LinkEntry) -> Self {
        Self {
            location: entry.location().to_string(),
            name: entry.name().to_string(),
            description: entry.description().to_string(),
            tags: entry.tags().iter().cloned().collect(),
            attributes: entry.attributes().clone(),
        }
    }

    fn into_entry(self) -> Result<LinkEntry> {
        let mut entry = LinkEntry::new(self.location)?;
        entry.set_name(self.name);
        entry.set_description(self.description);
        for tag in self.tags {
            entry.add_tag(tag);
        }
        for (key, value) in self.attributes {
            entry.set_attribute(key, value);
        }
        Ok(entry)
    }
}

fn format_error(err: serde_json::Error) -> LinkDbError {
    LinkDbError::Format(err.to_string())
}

fn decode(file: DatabaseFile) -> Result<LinkDatabase> {
    let entries = file
        .links
        .into_iter()
        .map(LinkRecord::into_entry)
        .collect::<Result<Vec<_>>>()?;

    let mut db = LinkDatabase::new();
    for entry in entries {
        db.add(entry);
    }
    tracing::debug!(links = db.count(), "decoded link database");
    Ok(db)
}

fn encode(db: &LinkDatabase) -> DatabaseFile {
    let links = db
        .ids_sorted()
        .into_iter()
        .filter_map(|id| db.get(id))
        .map(|entry| LinkRecord::from_entry(&entry.borrow()))
        .collect();
    DatabaseFile { links }
}

pub fn from_str(data: &str) -> Result<LinkDatabase> {
    let file: DatabaseFile = serde_json::from_str(data).map_err(format_error)?;
    decode(file)
}

pub fn from_reader<R: Read>(reader: R) -> Result<LinkDatabase> {
    let file: DatabaseFile = serde_json::from_reader(reader).map_err(format_error)?;
    decode(file)
}

/// Open failures are [`LinkDbError::Io`]; anything wrong with the bytes
/// themselves, invalid UTF-8 included, is [`LinkDbError::Format`].
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LinkDatabase> {
    let file = fs::File::open(path).map_err(LinkDbError::Io)?;
    from_reader(BufReader::new(file))
}

pub fn to_string(db: &LinkDatabase) -> Result<String> {
    serde_json::to_string_pretty(&encode(db)).map_err(LinkDbError::Serialization)
}

pub fn to_writer<W: Write>(db: &LinkDatabase, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &encode(db)).map_err(LinkDbError::Serialization)
}

/// Writes to a temporary sibling file first, then renames it over `path`.
pub fn to_path<P: AsRef<Path>>(db: &LinkDatabase, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = to_string(db)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("links.json");
    let tmp_path = path.with_file_name(format!(".{}-{}.tmp", file_name, std::process::id()));
    fs::write(&tmp_path, content).map_err(LinkDbError::Io)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(LinkDbError::Io(e));
    }
    Ok(())
}
