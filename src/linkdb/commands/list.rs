use crate::commands::{CmdResult, ListedLink};
use crate::error::Result;
use crate::store::DataStore;

/// Lists every link, ordered by id.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let db = store.load()?;
    let listed = ListedLink::collect(&db, &db.ids_sorted());
    Ok(CmdResult::default().with_listed_links(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_id_order() {
        let fixture = StoreFixture::new().with_links(3);
        let result = run(&fixture.store).unwrap();
        let names: Vec<&str> = result
            .listed_links
            .iter()
            .map(|l| l.entry.name())
            .collect();
        assert_eq!(names, vec!["Link 1", "Link 2", "Link 3"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        assert!(run(&fixture.store).unwrap().listed_links.is_empty());
    }
}
