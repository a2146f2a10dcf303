use crate::commands::{label, CmdMessage, CmdResult, ListedLink};
use crate::error::Result;
use crate::model::LinkEntry;
use crate::store::DataStore;

/// Everything needed to create a link.
#[derive(Debug, Clone, Default)]
pub struct NewLink {
    pub location: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub attributes: Vec<(String, String)>,
}

impl NewLink {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    fn into_entry(self) -> Result<LinkEntry> {
        let mut entry = LinkEntry::new(self.location)?
            .with_name(self.name)
            .with_description(self.description);
        for tag in self.tags {
            entry.add_tag(tag);
        }
        for (key, value) in self.attributes {
            entry.set_attribute(key, value);
        }
        Ok(entry)
    }
}

pub fn run<S: DataStore>(store: &mut S, link: NewLink) -> Result<CmdResult> {
    let entry = link.into_entry()?;
    let mut db = store.load()?;
    let id = db.add(entry);
    store.save(&db)?;

    let listed = ListedLink::collect(&db, &[id]);
    let mut result = CmdResult::default()
        .with_affected_ids(vec![id])
        .with_listed_links(listed);
    if let Some(link) = result.listed_links.first() {
        let message = format!("Link added ({}): {}", id, label(&link.entry));
        result.add_message(CmdMessage::success(message));
    }
    Ok(result)
}
