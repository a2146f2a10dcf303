//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It parses loosely-typed input (id strings, `key=value` pairs) into
//! command arguments and returns `Result<CmdResult>`; it holds no business
//! logic and performs no I/O of its own beyond what the store does.
//!
//! `LinkDbApi<S: DataStore>` is generic over the storage backend:
//! - Production: `LinkDbApi<FileStore>`
//! - Testing: `LinkDbApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::EntryId;
use std::path::PathBuf;

pub use crate::commands::add::NewLink;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::SearchRequest;
pub use crate::commands::update::LinkUpdate;
pub use crate::commands::{CmdMessage, CmdResult, ListedLink, MessageLevel};
use crate::store::DataStore;

pub struct LinkDbApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> LinkDbApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_link(&mut self, link: NewLink) -> Result<CmdResult> {
        commands::add::run(&mut self.store, link)
    }

    pub fn list_links(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_links<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::get::run(&self.store, &ids)
    }

    pub fn delete_links<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn update_link(&mut self, id: &str, update: LinkUpdate) -> Result<CmdResult> {
        let id: EntryId = id.parse()?;
        commands::update::run(&mut self.store, id, update)
    }

    pub fn tag_links<I: AsRef<str>>(&mut self, ids: &[I], tags: &[String]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::tagging::add_tags(&mut self.store, &ids, tags)
    }

    pub fn untag_links<I: AsRef<str>>(&mut self, ids: &[I], tags: &[String]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::tagging::remove_tags(&mut self.store, &ids, tags)
    }

    pub fn clear_tags<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::tagging::clear_tags(&mut self.store, &ids)
    }

    pub fn set_attributes<I: AsRef<str>>(&mut self, id: &str, pairs: &[I]) -> Result<CmdResult> {
        let id: EntryId = id.parse()?;
        let pairs = commands::helpers::parse_attribute_pairs(pairs)?;
        commands::attributes::set(&mut self.store, id, &pairs)
    }

    pub fn unset_attributes(&mut self, id: &str, keys: &[String]) -> Result<CmdResult> {
        let id: EntryId = id.parse()?;
        commands::attributes::unset(&mut self.store, id, keys)
    }

    pub fn search_links(&self, request: &SearchRequest) -> Result<CmdResult> {
        commands::search::run(&self.store, request)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

fn parse_ids<I: AsRef<str>>(ids: &[I]) -> Result<Vec<EntryId>> {
    ids.iter().map(|s| s.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkDbError;
    use crate::matcher::StringSearchOptions;
    use crate::store::memory::InMemoryStore;

    fn api() -> LinkDbApi<InMemoryStore> {
        LinkDbApi::new(InMemoryStore::new(), std::env::temp_dir())
    }

    #[test]
    fn dispatches_add_and_list() {
        let mut api = api();
        api.add_link(NewLink::new("https://a/")).unwrap();
        api.add_link(NewLink::new("https://b/")).unwrap();
        assert_eq!(api.list_links().unwrap().listed_links.len(), 2);
    }

    #[test]
    fn parses_ids_for_view_and_delete() {
        let mut api = api();
        api.add_link(NewLink::new("https://a/")).unwrap();

        assert_eq!(api.view_links(&["0"]).unwrap().listed_links.len(), 1);
        assert!(matches!(api.view_links(&["x1"]), Err(LinkDbError::Api(_))));

        let deleted = api.delete_links(&["0"]).unwrap();
        assert_eq!(deleted.affected_ids, vec![EntryId(0)]);
    }

    #[test]
    fn parses_attribute_pairs() {
        let mut api = api();
        api.add_link(NewLink::new("https://a/")).unwrap();
        api.set_attributes("0", &["lang=en"]).unwrap();

        let request = SearchRequest {
            attributes: vec![("lang".into(), "en".into())],
            options: StringSearchOptions::full(),
            ..SearchRequest::default()
        };
        assert_eq!(api.search_links(&request).unwrap().listed_links.len(), 1);
    }
}
