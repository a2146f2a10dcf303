//! # Query Model
//!
//! Queries are boolean tests over a [`LinkEntry`]. They form a small closed
//! algebra with one capability, [`Matches::matches`], and one recursive
//! evaluator ([`Query::matches`]).
//!
//! ## Variants
//!
//! ```text
//! Leaves                              Combinators
//! ------                              -----------
//! Field(location|name|description)    And(a, b)
//! Tag            (any tag)            Or(a, b)
//! Attribute      (key -> value)       AndCollection([..])   empty => true
//! AttributeContains (any key/value)   OrCollection([..])    empty => false
//! ```
//!
//! Every leaf compares strings through [`search_string`], so case folding and
//! full-vs-partial matching behave identically everywhere.
//!
//! ## Sharing
//!
//! Children are held as `Rc<Query>`. The same sub-query can appear in several
//! trees, and a tree can be reused for any number of searches.
//!
//! ## No Failure Mode
//!
//! Evaluation never errors. A missing field (an absent attribute, an empty tag
//! set) simply does not match.
//!
//! ## Derived Queries
//!
//! [`ContainsQuery`] is a builder that assembles the primitives above into an
//! "any field contains any term" query. It is not a variant of its own.

use crate::matcher::{search_string, StringSearchOptions};
use crate::model::LinkEntry;
use std::fmt;
use std::rc::Rc;

pub mod contains;

pub use contains::ContainsQuery;

/// The single capability shared by everything the database can search with.
///
/// Implemented by [`Query`], [`ContainsQuery`] and any
/// `Fn(&LinkEntry) -> bool` closure.
pub trait Matches {
    fn matches(&self, entry: &LinkEntry) -> bool;
}

impl<F> Matches for F
where
    F: Fn(&LinkEntry) -> bool,
{
    fn matches(&self, entry: &LinkEntry) -> bool {
        self(entry)
    }
}

/// Single-string fields a [`Query::Field`] can extract from an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Location,
    Name,
    Description,
}

impl Field {
    pub fn extract(self, entry: &LinkEntry) -> &str {
        match self {
            Field::Location => entry.location(),
            Field::Name => entry.name(),
            Field::Description => entry.description(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Location => "location",
            Field::Name => "name",
            Field::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `search_string(field(entry), term)`.
    Field {
        field: Field,
        term: String,
        options: StringSearchOptions,
    },
    /// True if any tag matches `term`.
    Tag {
        term: String,
        options: StringSearchOptions,
    },
    /// False if the entry lacks attribute `name`, otherwise the stored value
    /// is matched against `value`.
    ///
    /// With `ignore_case` the attribute name is looked up ASCII
    /// case-insensitively as well; otherwise it must match exactly.
    Attribute {
        name: String,
        value: String,
        options: StringSearchOptions,
    },
    /// True if any attribute key or value matches `term`.
    AttributeContains {
        term: String,
        options: StringSearchOptions,
    },
    And(Rc<Query>, Rc<Query>),
    Or(Rc<Query>, Rc<Query>),
    /// True iff every child matches. Vacuously true.
    AndCollection(Vec<Rc<Query>>),
    /// True iff at least one child matches. Vacuously false.
    OrCollection(Vec<Rc<Query>>),
}

impl Query {
    pub fn field(field: Field, term: impl Into<String>, options: StringSearchOptions) -> Self {
        Query::Field {
            field,
            term: term.into(),
            options,
        }
    }

    pub fn location(term: impl Into<String>, options: StringSearchOptions) -> Self {
        Self::field(Field::Location, term, options)
    }

    pub fn name(term: impl Into<String>, options: StringSearchOptions) -> Self {
        Self::field(Field::Name, term, options)
    }

    pub fn description(term: impl Into<String>, options: StringSearchOptions) -> Self {
        Self::field(Field::Description, term, options)
    }

    pub fn tag(term: impl Into<String>, options: StringSearchOptions) -> Self {
        Query::Tag {
            term: term.into(),
            options,
        }
    }

    pub fn attribute(
        name: impl Into<String>,
        value: impl Into<String>,
        options: StringSearchOptions,
    ) -> Self {
        Query::Attribute {
            name: name.into(),
            value: value.into(),
            options,
        }
    }

    pub fn attribute_contains(term: impl Into<String>, options: StringSearchOptions) -> Self {
        Query::AttributeContains {
            term: term.into(),
            options,
        }
    }

    pub fn and(a: impl Into<Rc<Query>>, b: impl Into<Rc<Query>>) -> Self {
        Query::And(a.into(), b.into())
    }

    pub fn or(a: impl Into<Rc<Query>>, b: impl Into<Rc<Query>>) -> Self {
        Query::Or(a.into(), b.into())
    }

    /// AND over every query in `queries`.
    pub fn all<I, Q>(queries: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Rc<Query>>,
    {
        Query::AndCollection(queries.into_iter().map(Into::into).collect())
    }

    /// OR over every query in `queries`.
    pub fn any<I, Q>(queries: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Rc<Query>>,
    {
        Query::OrCollection(queries.into_iter().map(Into::into).collect())
    }

    /// A query that matches every entry.
    pub fn matches_all() -> Self {
        Query::AndCollection(Vec::new())
    }

    /// A query that matches no entry.
    pub fn matches_none() -> Self {
        Query::OrCollection(Vec::new())
    }

    pub fn matches(&self, entry: &LinkEntry) -> bool {
        match self {
            Query::Field {
                field,
                term,
                options,
            } => search_string(field.extract(entry), term, options),
            Query::Tag { term, options } => entry
                .tags()
                .iter()
                .any(|tag| search_string(tag, term, options)),
            Query::Attribute {
                name,
                value,
                options,
            } => attribute_matches(entry, name, value, options),
            Query::AttributeContains { term, options } => {
                entry.attributes().iter().any(|(key, value)| {
                    search_string(key, term, options) || search_string(value, term, options)
                })
            }
            Query::And(a, b) => a.matches(entry) && b.matches(entry),
            Query::Or(a, b) => a.matches(entry) || b.matches(entry),
            Query::AndCollection(children) => children.iter().all(|q| q.matches(entry)),
            Query::OrCollection(children) => children.iter().any(|q| q.matches(entry)),
        }
    }
}

fn attribute_matches(
    entry: &LinkEntry,
    name: &str,
    value: &str,
    options: &StringSearchOptions,
) -> bool {
    if !options.ignore_case {
        if !entry.has_attribute(name) {
            return false;
        }
        return search_string(entry.attribute(name), value, options);
    }
    entry
        .attributes()
        .iter()
        .filter(|(key, _)| key.eq_ignore_ascii_case(name))
        .any(|(_, stored)| search_string(stored, value, options))
}

impl Matches for Query {
    fn matches(&self, entry: &LinkEntry) -> bool {
        Query::matches(self, entry)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn op(options: &StringSearchOptions) -> &'static str {
            match (options.match_full_string, options.ignore_case) {
                (true, false) => "==",
                (true, true) => "=~",
                (false, false) => "~",
                (false, true) => "~~",
            }
        }
        fn join(f: &mut fmt::Formatter<'_>, children: &[Rc<Query>], sep: &str) -> fmt::Result {
            write!(f, "(")?;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", sep)?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")
        }

        match self {
            Query::Field {
                field,
                term,
                options,
            } => write!(f, "{}{}{:?}", field.as_str(), op(options), term),
            Query::Tag { term, options } => write!(f, "tag{}{:?}", op(options), term),
            Query::Attribute {
                name,
                value,
                options,
            } => write!(f, "attr[{:?}]{}{:?}", name, op(options), value),
            Query::AttributeContains { term, options } => {
                write!(f, "attr{}{:?}", op(options), term)
            }
            Query::And(a, b) => write!(f, "({} AND {})", a, b),
            Query::Or(a, b) => write!(f, "({} OR {})", a, b),
            Query::AndCollection(children) if children.is_empty() => write!(f, "TRUE"),
            Query::OrCollection(children) if children.is_empty() => write!(f, "FALSE"),
            Query::AndCollection(children) => join(f, children, "AND"),
            Query::OrCollection(children) => join(f, children, "OR"),
        }
    }
}
