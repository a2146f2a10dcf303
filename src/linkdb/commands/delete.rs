use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EntryId;
use crate::store::DataStore;
use std::cell::RefCell;
use std::rc::Rc;

/// Deletes the given links. Unknown ids are reported as warnings, not errors.
pub fn run<S: DataStore>(store: &mut S, ids: &[EntryId]) -> Result<CmdResult> {
    let mut db = store.load()?;
    let mut result = CmdResult::default();

    let deleted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&deleted);
    let subscription = db.on_entry_deleted(move |id| sink.borrow_mut().push(id));

    for id in ids {
        match db.delete(*id) {
            Some(entry) => result.add_message(CmdMessage::success(format!(
                "Link deleted ({}): {}",
                id,
                label(&entry.borrow())
            ))),
            None => {
                tracing::warn!(%id, "delete requested for unknown link");
                result.add_message(CmdMessage::warning(format!("No link with id {}", id)));
            }
        }
    }
    db.disconnect(subscription);

    let deleted = deleted.borrow().clone();
    if !deleted.is_empty() {
        store.save(&db)?;
        if let Some(first) = deleted.iter().min() {
            if db.ids_sorted().last().is_some_and(|last| last > first) {
                result.add_message(CmdMessage::info(
                    "Links after the deleted ones have new ids; run `list` to see them.",
                ));
            }
        }
    }
    Ok(result.with_affected_ids(deleted))
}
