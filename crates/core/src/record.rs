//! Record structure for Tessera.
//!
//! This module defines the `Record` struct which represents a single entry in a
//! table, the `Fields` map it is built from, and the per-table `IdSequence`
//! that hands out record identifiers.

use crate::value::Value;
use std::collections::BTreeMap;

/// Unique identifier for a record.
pub type RecordId = u64;

/// Reserved field name under which a record exposes its identifier.
pub const ID_FIELD: &str = "_id";

/// Field name → value mapping.
pub type Fields = BTreeMap<String, Value>;

/// Merges `incoming` into `target`, overwriting on key conflicts.
///
/// The reserved `_id` field of `target` is never replaced.
pub fn merge_fields(target: &mut Fields, incoming: &Fields) {
    for (key, value) in incoming {
        if key == ID_FIELD && target.contains_key(ID_FIELD) {
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}

/// Projects `source` through a template.
///
/// Only the keys of `template` appear in the output. A key present in `source`
/// takes the source value; a missing key falls back to the template value.
pub fn project_fields(source: &Fields, template: &Fields) -> Fields {
    template
        .iter()
        .map(|(key, default)| {
            let value = source.get(key).unwrap_or(default);
            (key.clone(), value.clone())
        })
        .collect()
}

/// Monotonic identifier generator. Every table owns one.
#[derive(Clone, Debug)]
pub struct IdSequence {
    next: RecordId,
}

impl IdSequence {
    /// Creates a sequence whose first identifier is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next identifier and advances the sequence.
    pub fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// A record in a table.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Unique identifier for this record.
    id: RecordId,
    /// Field values, including the `_id` mirror of `id`.
    fields: Fields,
}

impl Record {
    /// Creates a record from a model template overlaid with a datum.
    ///
    /// The datum wins on conflicts, but `_id` is always the assigned identifier.
    pub fn new(id: RecordId, model: &Fields, datum: &Fields) -> Self {
        let mut fields = model.clone();
        merge_fields(&mut fields, datum);
        fields.insert(ID_FIELD.to_string(), Value::from(id));
        Self { id, fields }
    }

    /// Returns the record ID.
    #[inline]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns all fields, `_id` included.
    #[inline]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Gets a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Merges values into this record in place. `_id` is left untouched.
    pub fn merge(&mut self, values: &Fields) {
        merge_fields(&mut self.fields, values);
    }

    /// Projects this record through a read template.
    pub fn project(&self, template: &Fields) -> Fields {
        project_fields(&self.fields, template)
    }

    /// Consumes the record and returns its fields.
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}
