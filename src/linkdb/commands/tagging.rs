//! Link tagging commands.
//!
//! - `add_tags`: Add tags to links (idempotent)
//! - `remove_tags`: Remove specific tags from links
//! - `clear_tags`: Remove all tags from links

use crate::commands::helpers::resolve_ids;
use crate::commands::{label, CmdMessage, CmdResult, ListedLink};
use crate::error::{LinkDbError, Result};
use crate::model::EntryId;
use crate::store::{DataStore, LinkDatabase};

pub fn add_tags<S: DataStore>(store: &mut S, ids: &[EntryId], tags: &[String]) -> Result<CmdResult> {
    if tags.is_empty() {
        return Err(LinkDbError::Api("No tags specified".to_string()));
    }
    if let Some(tag) = tags.iter().find(|t| t.trim().is_empty()) {
        return Err(LinkDbError::Api(format!("Invalid tag {:?}", tag)));
    }

    let db = store.load()?;
    let resolved = resolve_ids(&db, ids)?;
    let mut result = CmdResult::default();
    let mut modified = Vec::new();

    for (id, handle) in resolved {
        let mut entry = handle.borrow_mut();
        let before = entry.tags().len();
        for tag in tags {
            entry.add_tag(tag.clone());
        }
        let added = entry.tags().len() - before;
        if added > 0 {
            modified.push(id);
            result.add_message(CmdMessage::success(format!(
                "Tagged ({}): {} (+{})",
                id,
                label(&entry),
                added
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "Already tagged ({}): {}",
                id,
                label(&entry)
            )));
        }
    }

    finish(store, &db, result, modified)
}

pub fn remove_tags<S: DataStore>(
    store: &mut S,
    ids: &[EntryId],
    tags: &[String],
) -> Result<CmdResult> {
    if tags.is_empty() {
        return Err(LinkDbError::Api("No tags specified".to_string()));
    }

    let db = store.load()?;
    let resolved = resolve_ids(&db, ids)?;
    let mut result = CmdResult::default();
    let mut modified = Vec::new();

    for (id, handle) in resolved {
        let mut entry = handle.borrow_mut();
        let before = entry.tags().len();
        for tag in tags {
            entry.remove_tag(tag);
        }
        if entry.tags().len() != before {
            modified.push(id);
            result.add_message(CmdMessage::success(format!(
                "Untagged ({}): {}",
                id,
                label(&entry)
            )));
        }
    }

    finish(store, &db, result, modified)
}

pub fn clear_tags<S: DataStore>(store: &mut S, ids: &[EntryId]) -> Result<CmdResult> {
    let db = store.load()?;
    let resolved = resolve_ids(&db, ids)?;
    let mut result = CmdResult::default();
    let mut modified = Vec::new();

    for (id, handle) in resolved {
        let mut entry = handle.borrow_mut();
        if !entry.tags().is_empty() {
            entry.clear_tags();
            modified.push(id);
            result.add_message(CmdMessage::success(format!(
                "Tags cleared ({}): {}",
                id,
                label(&entry)
            )));
        }
    }

    finish(store, &db, result, modified)
}

fn finish<S: DataStore>(
    store: &mut S,
    db: &LinkDatabase,
    result: CmdResult,
    modified: Vec<EntryId>,
) -> Result<CmdResult> {
    if !modified.is_empty() {
        store.save(db)?;
    }
    let listed = ListedLink::collect(db, &modified);
    Ok(result.with_affected_ids(modified).with_listed_links(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn tags_of<S: DataStore>(store: &S, id: EntryId) -> Vec<String> {
        let db = store.load().unwrap();
        let entry = db.get(id).unwrap();
        let tags = entry.borrow().tags().iter().cloned().collect();
        tags
    }

    #[test]
    fn add_is_idempotent() {
        let mut fixture = StoreFixture::new().with_links(1);
        let tags = vec!["rust".to_string()];

        let first = add_tags(&mut fixture.store, &[EntryId(0)], &tags).unwrap();
        let second = add_tags(&mut fixture.store, &[EntryId(0)], &tags).unwrap();

        assert_eq!(first.affected_ids, vec![EntryId(0)]);
        assert!(second.affected_ids.is_empty());
        assert_eq!(tags_of(&fixture.store, EntryId(0)), vec!["rust"]);
    }

    #[test]
    fn remove_absent_tag_is_noop() {
        let mut fixture = StoreFixture::new().with_tagged_link("https://a/", &["keep"]);
        let result = remove_tags(&mut fixture.store, &[EntryId(0)], &["gone".to_string()]).unwrap();
        assert!(result.affected_ids.is_empty());
        assert_eq!(tags_of(&fixture.store, EntryId(0)), vec!["keep"]);
    }

    #[test]
    fn remove_and_clear() {
        let mut fixture = StoreFixture::new().with_tagged_link("https://a/", &["a", "b", "c"]);
        remove_tags(&mut fixture.store, &[EntryId(0)], &["b".to_string()]).unwrap();
        assert_eq!(tags_of(&fixture.store, EntryId(0)), vec!["a", "c"]);

        clear_tags(&mut fixture.store, &[EntryId(0)]).unwrap();
        assert!(tags_of(&fixture.store, EntryId(0)).is_empty());
    }

    #[test]
    fn rejects_blank_tags() {
        let mut fixture = StoreFixture::new().with_links(1);
        assert!(add_tags(&mut fixture.store, &[EntryId(0)], &[]).is_err());
        assert!(add_tags(&mut fixture.store, &[EntryId(0)], &["  ".to_string()]).is_err());
    }
}
