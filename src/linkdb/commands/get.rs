use crate::commands::helpers::resolve_ids;
use crate::commands::{CmdResult, ListedLink};
use crate::error::Result;
use crate::model::EntryId;
use crate::store::DataStore;

/// Fetches the given links. Any unknown id fails the whole command.
pub fn run<S: DataStore>(store: &S, ids: &[EntryId]) -> Result<CmdResult> {
    let db = store.load()?;
    let resolved = resolve_ids(&db, ids)?;
    let found: Vec<EntryId> = resolved.into_iter().map(|(id, _)| id).collect();
    Ok(CmdResult::default().with_listed_links(ListedLink::collect(&db, &found)))
}
