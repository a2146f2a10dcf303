use crate::error::{LinkDbError, Result};
use crate::model::EntryId;
use crate::store::{EntryHandle, LinkDatabase};

/// Looks up every id, failing on the first one the database does not know.
pub fn resolve_ids(db: &LinkDatabase, ids: &[EntryId]) -> Result<Vec<(EntryId, EntryHandle)>> {
    if ids.is_empty() {
        return Err(LinkDbError::Api("No link ids specified".to_string()));
    }
    ids.iter()
        .map(|id| {
            db.get(*id)
                .map(|entry| (*id, entry))
                .ok_or(LinkDbError::LinkNotFound(*id))
        })
        .collect()
}

/// Parses `key=value` pairs. A pair without `=` sets an empty value.
pub fn parse_attribute_pairs<I: AsRef<str>>(pairs: &[I]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key.is_empty() {
                return Err(LinkDbError::Api(format!(
                    "Invalid attribute {:?}: missing key",
                    pair
                )));
            }
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}
