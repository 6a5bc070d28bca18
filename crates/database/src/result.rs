//! Query results.

use serde::Serialize;
use std::collections::BTreeMap;
use tessera_core::Fields;

/// The outcome of a routed query.
///
/// `modified` is the total across tables. `data` holds the projected records
/// of each table and is only populated by reads. Serialized, the table arrays
/// sit next to `modified`: `{"modified": 2, "users": [..]}`. No table can be
/// named `modified`, so the two never collide.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueryResult {
    pub modified: usize,
    #[serde(flatten)]
    pub data: BTreeMap<String, Vec<Fields>>,
}

impl QueryResult {
    /// Returns the records read from one table.
    pub fn table(&self, name: &str) -> Option<&[Fields]> {
        self.data.get(name).map(Vec::as_slice)
    }

    /// Returns the result as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        // Field maps always serialize
        serde_json::to_value(self).unwrap_or_default()
    }
}
