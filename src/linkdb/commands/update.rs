use crate::commands::helpers::resolve_ids;
use crate::commands::{label, CmdMessage, CmdResult, ListedLink};
use crate::error::{LinkDbError, Result};
use crate::model::EntryId;
use crate::store::DataStore;

/// Field changes for one link. `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct LinkUpdate {
    pub location: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl LinkUpdate {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.name.is_none() && self.description.is_none()
    }
}

pub fn run<S: DataStore>(store: &mut S, id: EntryId, update: LinkUpdate) -> Result<CmdResult> {
    if update.is_empty() {
        return Err(LinkDbError::Api("Nothing to update".to_string()));
    }

    let mut db = store.load()?;
    let (id, handle) = resolve_ids(&db, &[id])?.remove(0);
    {
        let mut entry = handle.borrow_mut();
        if let Some(location) = update.location {
            entry.set_location(location)?;
        }
        if let Some(name) = update.name {
            entry.set_name(name);
        }
        if let Some(description) = update.description {
            entry.set_description(description);
        }
    }
    store.save(&db)?;

    let mut result = CmdResult::default()
        .with_affected_ids(vec![id])
        .with_listed_links(ListedLink::collect(&db, &[id]));
    let message = format!("Link updated ({}): {}", id, label(&handle.borrow()));
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
