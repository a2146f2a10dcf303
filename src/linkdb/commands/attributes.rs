use crate::commands::helpers::resolve_ids;
use crate::commands::{label, CmdMessage, CmdResult, ListedLink};
use crate::error::{LinkDbError, Result};
use crate::model::EntryId;
use crate::store::DataStore;

/// Sets (creates or overwrites) attributes on one link.
pub fn set<S: DataStore>(
    store: &mut S,
    id: EntryId,
    pairs: &[(String, String)],
) -> Result<CmdResult> {
    if pairs.is_empty() {
        return Err(LinkDbError::Api("No attributes specified".to_string()));
    }

    let db = store.load()?;
    let (id, handle) = resolve_ids(&db, &[id])?.remove(0);
    let mut result = CmdResult::default();
    {
        let mut entry = handle.borrow_mut();
        for (key, value) in pairs {
            entry.set_attribute(key.clone(), value.clone());
        }
        result.add_message(CmdMessage::success(format!(
            "Attributes set ({}): {}",
            id,
            label(&entry)
        )));
    }
    store.save(&db)?;

    Ok(result
        .with_affected_ids(vec![id])
        .with_listed_links(ListedLink::collect(&db, &[id])))
}

/// Removes attributes from one link. Missing keys are ignored.
pub fn unset<S: DataStore>(store: &mut S, id: EntryId, keys: &[String]) -> Result<CmdResult> {
    if keys.is_empty() {
        return Err(LinkDbError::Api("No attributes specified".to_string()));
    }

    let db = store.load()?;
    let (id, handle) = resolve_ids(&db, &[id])?.remove(0);
    let mut result = CmdResult::default();

    let removed: Vec<&String> = {
        let mut entry = handle.borrow_mut();
        let present: Vec<&String> = keys.iter().filter(|k| entry.has_attribute(k)).collect();
        for key in &present {
            entry.remove_attribute(key);
        }
        present
    };

    if removed.is_empty() {
        result.add_message(CmdMessage::info(format!("No matching attributes on {}", id)));
        return Ok(result);
    }

    store.save(&db)?;
    result.add_message(CmdMessage::success(format!(
        "Attributes removed ({}): {}",
        id,
        removed
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    )));
    Ok(result
        .with_affected_ids(vec![id])
        .with_listed_links(ListedLink::collect(&db, &[id])))
}
