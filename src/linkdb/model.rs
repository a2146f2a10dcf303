//! # Domain Model: Link Entries
//!
//! A [`LinkEntry`] is a single link record:
//!
//! ```text
//! location     "https://example.org/"   (empty, or a valid URL)
//! name         "Example"
//! description  "free text"
//! tags         {"rust", "docs"}         (a set, no duplicates)
//! attributes   {"lang": "en"}           (unique keys)
//! ```
//!
//! ## Location Validation
//!
//! The location is the only field with an invariant. An empty location is
//! always accepted; anything else must parse as an absolute URL. Validation
//! happens on construction and on every [`LinkEntry::set_location`], so an
//! entry can never hold an invalid location.
//!
//! ## Attribute Lookup
//!
//! [`LinkEntry::attribute`] returns `""` for a missing key. Callers that need
//! to tell "missing" from "empty" use [`LinkEntry::has_attribute`] first.
//!
//! ## Identity
//!
//! Entries carry no identity of their own. The [`EntryId`] lives in the
//! database that owns the entry (see `store`).

use crate::error::{LinkDbError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Stable identity of an entry inside a `LinkDatabase`. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntryId(pub u64);

impl EntryId {
    pub fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        EntryId(self.0 + 1)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = LinkDbError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(EntryId)
            .map_err(|_| LinkDbError::Api(format!("Invalid link id: {}", s)))
    }
}

/// Checks that a non-empty location is a syntactically valid URL.
pub fn validate_location(location: &str) -> Result<()> {
    if location.is_empty() {
        return Ok(());
    }
    url::Url::parse(location)
        .map(|_| ())
        .map_err(|_| LinkDbError::Validation(location.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkEntry {
    location: String,
    name: String,
    description: String,
    tags: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

impl LinkEntry {
    /// Creates an entry pointing at `location`. Fails if the location is
    /// non-empty and not a valid URL.
    pub fn new(location: impl Into<String>) -> Result<Self> {
        let location = location.into();
        validate_location(&location)?;
        Ok(Self {
            location,
            ..Self::default()
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Replaces the location. On failure the entry is left unchanged.
    pub fn set_location(&mut self, location: impl Into<String>) -> Result<()> {
        let location = location.into();
        validate_location(&location)?;
        self.location = location;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Exact membership, not substring.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Adding a tag that is already present is a no-op.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Value of `key`, or `""` when the attribute is missing.
    pub fn attribute(&self, key: &str) -> &str {
        self.attributes.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn remove_attribute(&mut self, key: &str) {
        self.attributes.remove(key);
    }

    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_is_empty() {
        let entry = LinkEntry::default();
        assert_eq!(entry.location(), "");
        assert_eq!(entry.name(), "");
        assert_eq!(entry.description(), "");
        assert!(entry.tags().is_empty());
        assert!(entry.attributes().is_empty());
    }

    #[test]
    fn test_new_validates_location() {
        assert!(LinkEntry::new("https://gentoo.org").is_ok());
        assert!(LinkEntry::new("").is_ok());
        assert!(matches!(
            LinkEntry::new("not a url"),
            Err(LinkDbError::Validation(_))
        ));
    }

    #[test]
    fn test_set_location_rejects_invalid_and_keeps_old_value() {
        let mut entry = LinkEntry::new("https://gentoo.org").unwrap();
        let err = entry.set_location("not a url").unwrap_err();
        assert!(matches!(err, LinkDbError::Validation(ref s) if s == "not a url"));
        assert_eq!(entry.location(), "https://gentoo.org");

        entry.set_location("").unwrap();
        assert_eq!(entry.location(), "");
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a = LinkEntry::new("https://a/").unwrap().with_name("a").with_description("b");
        let b = LinkEntry::new("https://a/").unwrap().with_name("b").with_description("a");
        let c = LinkEntry::new("https://b/").unwrap().with_name("a").with_description("a");
        let d = a.clone();

        assert_eq!(a, a);
        assert_eq!(a, d);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(c, a);
        assert_ne!(a.clone().with_tag("x"), a);
        assert_ne!(a.clone().with_attribute("k", "v"), a);
    }

    #[test]
    fn test_tags_are_a_set() {
        let mut entry = LinkEntry::default();
        entry.add_tag("rust");
        entry.add_tag("rust");
        assert_eq!(entry.tags().len(), 1);
        assert!(entry.has_tag("rust"));
        assert!(!entry.has_tag("rus"));

        let before = entry.clone();
        entry.remove_tag("missing");
        assert_eq!(entry, before);

        entry.remove_tag("rust");
        assert!(entry.tags().is_empty());
    }

    #[test]
    fn test_missing_attribute_reads_as_empty() {
        let mut entry = LinkEntry::default();
        assert_eq!(entry.attribute("lang"), "");
        assert!(!entry.has_attribute("lang"));

        entry.set_attribute("lang", "");
        assert_eq!(entry.attribute("lang"), "");
        assert!(entry.has_attribute("lang"));

        entry.set_attribute("lang", "en");
        entry.set_attribute("lang", "fr");
        assert_eq!(entry.attribute("lang"), "fr");
        assert_eq!(entry.attributes().len(), 1);

        entry.remove_attribute("lang");
        assert!(!entry.has_attribute("lang"));
    }

    #[test]
    fn test_entry_id_parsing() {
        assert_eq!("42".parse::<EntryId>().unwrap(), EntryId(42));
        assert!("p1".parse::<EntryId>().is_err());
        assert_eq!(EntryId(7).to_string(), "7");
    }
}
