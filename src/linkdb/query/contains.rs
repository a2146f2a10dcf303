//! "Any field contains any term" queries.
//!
//! For each distinct term the builder produces
//!
//! ```text
//! OR( location~t, name~t, description~t, tag~t, attr-key-or-value~t )
//! ```
//!
//! and ORs those together. With no terms the result is an empty OR, which
//! matches nothing.

use super::{Field, Matches, Query};
use crate::matcher::StringSearchOptions;
use crate::model::LinkEntry;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsQuery {
    terms: Vec<String>,
    options: StringSearchOptions,
    query: Query,
}

impl Default for ContainsQuery {
    fn default() -> Self {
        Self::new(Vec::<String>::new(), StringSearchOptions::default())
    }
}

impl ContainsQuery {
    /// Builds the query. Duplicate terms are dropped, keeping the first
    /// occurrence.
    pub fn new<I, S>(terms: I, options: StringSearchOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let terms: Vec<String> = terms
            .into_iter()
            .map(Into::into)
            .filter(|term| seen.insert(term.clone()))
            .collect();

        let query = Query::OrCollection(
            terms
                .iter()
                .map(|term| Rc::new(query_for_term(term, options)))
                .collect(),
        );

        Self {
            terms,
            options,
            query,
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn options(&self) -> StringSearchOptions {
        self.options
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn into_query(self) -> Query {
        self.query
    }

    pub fn matches(&self, entry: &LinkEntry) -> bool {
        self.query.matches(entry)
    }
}

fn query_for_term(term: &str, options: StringSearchOptions) -> Query {
    Query::any([
        Query::field(Field::Location, term, options),
        Query::field(Field::Name, term, options),
        Query::field(Field::Description, term, options),
        Query::tag(term, options),
        Query::attribute_contains(term, options),
    ])
}

impl From<ContainsQuery> for Query {
    fn from(contains: ContainsQuery) -> Self {
        contains.into_query()
    }
}

impl Matches for ContainsQuery {
    fn matches(&self, entry: &LinkEntry) -> bool {
        ContainsQuery::matches(self, entry)
    }
}
