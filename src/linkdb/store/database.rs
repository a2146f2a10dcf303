use crate::model::{EntryId, LinkEntry};
use crate::query::Matches;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Shared handle to an entry owned by a [`LinkDatabase`].
///
/// Mutations through a handle are visible to the database and to every other
/// holder. Deleting the id from the database does not invalidate handles that
/// were already handed out.
pub type EntryHandle = Rc<RefCell<LinkEntry>>;

/// Token returned when subscribing to change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Slot = Box<dyn FnMut(EntryId)>;

#[derive(Default)]
struct Signal {
    slots: Vec<(SubscriptionId, Slot)>,
}

impl Signal {
    fn connect(&mut self, id: SubscriptionId, slot: Slot) {
        self.slots.push((id, slot));
    }

    fn disconnect(&mut self, id: SubscriptionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(sid, _)| *sid != id);
        self.slots.len() != before
    }

    fn emit(&mut self, entry_id: EntryId) {
        for (_, slot) in self.slots.iter_mut() {
            slot(entry_id);
        }
    }
}

/// Identity-keyed owner of link entries.
///
/// Ids are handed out by [`add`](Self::add) in increasing order and are never
/// reused, even after the entry is deleted. Iteration and search results come
/// back in no particular order; sort by id when order matters.
#[derive(Default)]
pub struct LinkDatabase {
    links: HashMap<EntryId, EntryHandle>,
    next_id: EntryId,
    next_subscription: u64,
    entry_added: Signal,
    entry_deleted: Signal,
}

impl LinkDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub fn count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The id the next [`add`](Self::add) will return.
    pub fn next_id(&self) -> EntryId {
        self.next_id
    }

    pub fn has(&self, id: EntryId) -> bool {
        self.links.contains_key(&id)
    }

    pub fn get(&self, id: EntryId) -> Option<EntryHandle> {
        self.links.get(&id).cloned()
    }

    /// Stores `entry` under a fresh id and notifies "added" subscribers.
    pub fn add(&mut self, entry: LinkEntry) -> EntryId {
        self.add_handle(Rc::new(RefCell::new(entry)))
    }

    /// Stores an existing handle under a fresh id.
    pub fn add_handle(&mut self, handle: EntryHandle) -> EntryId {
        let id = self.next_id;
        self.links.insert(id, handle);
        self.next_id = id.next();
        tracing::debug!(%id, "link added");
        self.entry_added.emit(id);
        id
    }

    /// Removes `id` and notifies "deleted" subscribers. Unknown ids are a
    /// no-op and notify nobody.
    pub fn delete(&mut self, id: EntryId) -> Option<EntryHandle> {
        let removed = self.links.remove(&id)?;
        tracing::debug!(%id, "link deleted");
        self.entry_deleted.emit(id);
        Some(removed)
    }

    /// Every entry for which `query` matches, paired with its id.
    pub fn search<Q>(&self, query: &Q) -> Vec<(EntryId, EntryHandle)>
    where
        Q: Matches + ?Sized,
    {
        let result: Vec<_> = self
            .links
            .iter()
            .filter(|(_, entry)| query.matches(&entry.borrow()))
            .map(|(id, entry)| (*id, Rc::clone(entry)))
            .collect();
        tracing::debug!(scanned = self.links.len(), matched = result.len(), "search");
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &EntryHandle)> + '_ {
        self.links.iter().map(|(id, entry)| (*id, entry))
    }

    /// All live ids in ascending order.
    pub fn ids_sorted(&self) -> Vec<EntryId> {
        let mut ids: Vec<EntryId> = self.links.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Calls `f` with the new id after every successful [`add`](Self::add).
    pub fn on_entry_added(&mut self, f: impl FnMut(EntryId) + 'static) -> SubscriptionId {
        let id = self.subscription_id();
        self.entry_added.connect(id, Box::new(f));
        id
    }

    /// Calls `f` with the removed id after every effective
    /// [`delete`](Self::delete).
    pub fn on_entry_deleted(&mut self, f: impl FnMut(EntryId) + 'static) -> SubscriptionId {
        let id = self.subscription_id();
        self.entry_deleted.connect(id, Box::new(f));
        id
    }

    /// Returns whether a subscription was removed.
    pub fn disconnect(&mut self, subscription: SubscriptionId) -> bool {
        self.entry_added.disconnect(subscription) || self.entry_deleted.disconnect(subscription)
    }

    fn subscription_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        id
    }
}

impl fmt::Debug for LinkDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkDatabase")
            .field("links", &self.links)
            .field("next_id", &self.next_id)
            .field("added_subscribers", &self.entry_added.slots.len())
            .field("deleted_subscribers", &self.entry_deleted.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::StringSearchOptions;
    use crate::query::{ContainsQuery, Query};

    fn link(location: &str) -> LinkEntry {
        LinkEntry::new(location).unwrap()
    }

    fn locations(results: &[(EntryId, EntryHandle)]) -> Vec<String> {
        let mut locs: Vec<String> = results
            .iter()
            .map(|(_, e)| e.borrow().location().to_string())
            .collect();
        locs.sort();
        locs
    }

    fn two_links() -> LinkDatabase {
        let mut db = LinkDatabase::new();
        db.add(link("https://a/"));
        db.add(link("https://b/"));
        db
    }

    #[test]
    fn test_add_and_get() {
        let mut db = LinkDatabase::new();
        let a = db.add(link("https://a/"));
        let b = db.add(link("https://b/"));

        assert_eq!(db.get(a).unwrap().borrow().location(), "https://a/");
        assert_eq!(db.get(b).unwrap().borrow().location(), "https://b/");
        assert!(db.has(a));
        assert_eq!(db.count(), 2);
        assert!(db.get(EntryId(99)).is_none());
    }

    #[test]
    fn test_ids_increase_and_are_never_reused() {
        let mut db = LinkDatabase::new();
        let first = db.add(LinkEntry::default());
        let second = db.add(LinkEntry::default());
        db.delete(second);
        db.delete(first);
        let third = db.add(LinkEntry::default());

        assert!(first < second);
        assert!(second < third);
        assert!(db.next_id() > third);
        assert!(db.get(first).is_none());
        assert!(db.get(second).is_none());
    }

    #[test]
    fn test_delete() {
        let mut db = LinkDatabase::new();
        let id = db.add(link("https://a/"));
        assert!(db.has(id));

        assert!(db.delete(id).is_some());
        assert!(!db.has(id));
        assert_eq!(db.count(), 0);
        assert!(db.delete(id).is_none());
    }

    #[test]
    fn test_handles_share_mutations_and_outlive_deletion() {
        let mut db = LinkDatabase::new();
        let id = db.add(link("https://a/"));

        let handle = db.get(id).unwrap();
        handle.borrow_mut().set_name("renamed");
        assert_eq!(db.get(id).unwrap().borrow().name(), "renamed");

        db.delete(id);
        assert_eq!(handle.borrow().name(), "renamed");
    }

    #[test]
    fn test_search_all_and_none() {
        let db = two_links();

        let all = db.search(&|_: &LinkEntry| true);
        assert_eq!(locations(&all), vec!["https://a/", "https://b/"]);

        assert!(db.search(&|_: &LinkEntry| false).is_empty());
        assert_eq!(db.search(&Query::matches_all()).len(), 2);
        assert!(db.search(&Query::matches_none()).is_empty());
    }

    #[test]
    fn test_search_basic() {
        let db = two_links();
        let found = db.search(&|e: &LinkEntry| e.location() == "https://a/");
        assert_eq!(locations(&found), vec!["https://a/"]);

        let found = db.search(&Query::location("b", StringSearchOptions::partial()));
        assert_eq!(locations(&found), vec!["https://b/"]);
    }

    #[test]
    fn test_search_returns_ids() {
        let mut db = LinkDatabase::new();
        db.add(LinkEntry::default().with_tag("x"));
        let tagged = db.add(LinkEntry::default().with_tag("rust"));

        let found = db.search(&ContainsQuery::new(["rust"], StringSearchOptions::partial()));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, tagged);
    }

    #[test]
    fn test_iteration_visits_every_entry() {
        let db = two_links();
        let mut ids: Vec<EntryId> = db.iter().map(|(id, _)| id).collect();
        ids.sort();
        assert_eq!(ids, db.ids_sorted());
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_change_notifications() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut db = LinkDatabase::new();

        let added = Rc::clone(&events);
        db.on_entry_added(move |id| added.borrow_mut().push(("added", id)));
        let deleted = Rc::clone(&events);
        let sub = db.on_entry_deleted(move |id| deleted.borrow_mut().push(("deleted", id)));

        let id = db.add(LinkEntry::default());
        db.delete(id);
        db.delete(id);

        assert_eq!(*events.borrow(), vec![("added", id), ("deleted", id)]);

        assert!(db.disconnect(sub));
        assert!(!db.disconnect(sub));
        let other = db.add(LinkEntry::default());
        db.delete(other);
        assert_eq!(*events.borrow(), vec![("added", id), ("deleted", id), ("added", other)]);
    }
}
