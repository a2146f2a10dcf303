use super::{json, DataStore, LinkDatabase};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data; the database is kept in its encoded form so every
/// load goes through the real codec.
#[derive(Default)]
pub struct InMemoryStore {
    encoded: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose next load decodes `data` verbatim.
    pub fn from_encoded(data: impl Into<String>) -> Self {
        Self {
            encoded: Some(data.into()),
        }
    }

    pub fn encoded(&self) -> Option<&str> {
        self.encoded.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<LinkDatabase> {
        match &self.encoded {
            Some(data) => json::from_str(data),
            None => Ok(LinkDatabase::new()),
        }
    }

    fn save(&mut self, db: &LinkDatabase) -> Result<()> {
        self.encoded = Some(json::to_string(db)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::LinkEntry;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(mut self, entry: LinkEntry) -> Self {
            let mut db = self.store.load().unwrap();
            db.add(entry);
            self.store.save(&db).unwrap();
            self
        }

        pub fn with_links(mut self, count: usize) -> Self {
            for i in 0..count {
                let entry = LinkEntry::new(format!("https://example.org/{}", i + 1))
                    .unwrap()
                    .with_name(format!("Link {}", i + 1));
                self = self.push(entry);
            }
            self
        }

        pub fn with_tagged_link(self, location: &str, tags: &[&str]) -> Self {
            let mut entry = LinkEntry::new(location).unwrap();
            for tag in tags {
                entry.add_tag(*tag);
            }
            self.push(entry)
        }

        pub fn with_entry(self, entry: LinkEntry) -> Self {
            self.push(entry)
        }
    }
}
