use linkdb::error::LinkDbError;
use linkdb::matcher::StringSearchOptions;
use linkdb::model::{EntryId, LinkEntry};
use linkdb::query::{ContainsQuery, Query};
use linkdb::store::{json, LinkDatabase};

fn sorted_locations(results: &[(EntryId, linkdb::store::EntryHandle)]) -> Vec<String> {
    let mut locations: Vec<String> = results
        .iter()
        .map(|(_, entry)| entry.borrow().location().to_string())
        .collect();
    locations.sort();
    locations
}

fn entries(db: &LinkDatabase) -> Vec<LinkEntry> {
    let mut entries: Vec<LinkEntry> = db.iter().map(|(_, e)| e.borrow().clone()).collect();
    entries.sort_by(|a, b| {
        (a.location(), a.name(), a.description()).cmp(&(b.location(), b.name(), b.description()))
    });
    entries
}

#[test]
fn test_search_everything_and_nothing() {
    let mut db = LinkDatabase::new();
    db.add(LinkEntry::new("https://a/").unwrap());
    db.add(LinkEntry::new("https://b/").unwrap());

    assert_eq!(
        sorted_locations(&db.search(&Query::matches_all())),
        vec!["https://a/", "https://b/"]
    );
    assert!(db.search(&Query::matches_none()).is_empty());
}

#[test]
fn test_contains_query_over_store() {
    let mut db = LinkDatabase::new();
    let hit = db.add(LinkEntry::new("https://abc.def/ghi").unwrap());
    db.add(
        LinkEntry::new("https://ab/")
            .unwrap()
            .with_name("ab")
            .with_tag("ab")
            .with_attribute("ab", "xy"),
    );

    let query = ContainsQuery::new(["abc", "xyz"], StringSearchOptions::new(false, true));
    let found = db.search(&query);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, hit);
}

#[test]
fn test_contains_matches_iff_some_field_contains_term() {
    let options = StringSearchOptions::partial();
    let term = "needle";
    let base = || LinkEntry::new("https://hay.stack/").unwrap().with_name("hay");
    let with_term = [
        LinkEntry::new("https://needle.org/").unwrap(),
        base().with_name("a needle"),
        base().with_description("needles"),
        base().with_tag("needle"),
        base().with_attribute("needle", "x"),
        base().with_attribute("x", "needle"),
    ];
    let query = ContainsQuery::new([term], options);
    for entry in &with_term {
        assert!(query.matches(entry), "expected match for {:?}", entry);
    }
    assert!(!query.matches(&base().with_tag("need").with_attribute("nee", "dle")));
}

#[test]
fn test_attribute_key_case() {
    let entry = LinkEntry::default().with_attribute("ab", "12");
    let full = StringSearchOptions::full();
    assert!(Query::attribute("ab", "12", full).matches(&entry));
    assert!(!Query::attribute("AB", "12", full).matches(&entry));
    assert!(Query::attribute("AB", "12", full.ignoring_case()).matches(&entry));
}

#[test]
fn test_round_trip_preserves_entries() {
    let mut db = LinkDatabase::new();
    db.add(
        LinkEntry::new("https://gentoo.org")
            .unwrap()
            .with_name("MyName")
            .with_description("My description.")
            .with_tag("first tag")
            .with_attribute("ab", "12"),
    );
    db.add(LinkEntry::default());
    let removed = db.add(LinkEntry::new("https://gone/").unwrap());
    db.delete(removed);

    let copy = json::from_str(&json::to_string(&db).unwrap()).unwrap();
    assert_eq!(entries(&copy), entries(&db));
}

#[test]
fn test_decoding_scenarios() {
    assert_eq!(json::from_str(r#"{"links": []}"#).unwrap().count(), 0);
    assert!(matches!(json::from_str("{}"), Err(LinkDbError::Format(_))));
    assert!(matches!(json::from_str(""), Err(LinkDbError::Format(_))));
}

#[test]
fn test_location_validation() {
    let mut entry = LinkEntry::default();
    assert!(matches!(
        entry.set_location("not a url"),
        Err(LinkDbError::Validation(_))
    ));
    assert!(entry.set_location("").is_ok());
}
