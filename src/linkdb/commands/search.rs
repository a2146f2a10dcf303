//! Searching links.
//!
//! A [`SearchRequest`] is turned into a single [`Query`] tree:
//!
//! ```text
//! free terms            -> ContainsQuery (any field contains any term)
//! --name/--location/... -> Field queries
//! --tag t               -> Tag query
//! --attr k=v            -> Attribute query
//! ```
//!
//! The pieces are ANDed together, or ORed when `match_any` is set. A request
//! with no terms and no filters matches every link.

use crate::commands::{CmdResult, ListedLink};
use crate::error::Result;
use crate::matcher::StringSearchOptions;
use crate::model::EntryId;
use crate::query::{ContainsQuery, Field, Query};
use crate::store::DataStore;

#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub terms: Vec<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub match_any: bool,
    pub options: StringSearchOptions,
}

impl SearchRequest {
    pub fn terms<I, S>(terms: I, options: StringSearchOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            options,
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> Query {
        let options = self.options;
        let mut parts: Vec<Query> = Vec::new();

        if !self.terms.is_empty() {
            parts.push(ContainsQuery::new(self.terms.iter().cloned(), options).into());
        }
        let fields = [
            (Field::Location, &self.location),
            (Field::Name, &self.name),
            (Field::Description, &self.description),
        ];
        for (field, term) in fields {
            if let Some(term) = term {
                parts.push(Query::field(field, term.clone(), options));
            }
        }
        for tag in &self.tags {
            parts.push(Query::tag(tag.clone(), options));
        }
        for (key, value) in &self.attributes {
            parts.push(Query::attribute(key.clone(), value.clone(), options));
        }

        match parts.len() {
            0 => Query::matches_all(),
            1 => parts.remove(0),
            _ if self.match_any => Query::any(parts),
            _ => Query::all(parts),
        }
    }
}

pub fn run<S: DataStore>(store: &S, request: &SearchRequest) -> Result<CmdResult> {
    let db = store.load()?;
    let query = request.to_query();
    tracing::debug!(%query, "searching links");

    let mut ids: Vec<EntryId> = db.search(&query).into_iter().map(|(id, _)| id).collect();
    ids.sort();

    Ok(CmdResult::default().with_listed_links(ListedLink::collect(&db, &ids)))
}
