//! Record storage for a single table.
//!
//! This module provides the `Table` struct which keeps records in insertion
//! order and executes create/read/update/remove against AND-ed predicates.

use tessera_core::{Error, Fields, IdSequence, Record, RecordId, Result};
use tessera_query::{match_all, SubQuery};
use tracing::trace;

/// Outcome of a read: the projected records and their count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadOutput {
    pub modified: usize,
    pub data: Vec<Fields>,
}

/// An ordered collection of records sharing a model template.
#[derive(Clone, Debug)]
pub struct Table {
    name: String,
    model: Fields,
    records: Vec<Record>,
    ids: IdSequence,
}

impl Table {
    /// Creates an empty table with the given model template.
    pub fn new(name: impl Into<String>, model: Fields) -> Self {
        Self {
            name: name.into(),
            model,
            records: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the model template applied to new records.
    pub fn model(&self) -> &Fields {
        &self.model
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn scan(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// Gets a record by ID.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        // IDs are assigned in increasing order and records never move
        self.records
            .binary_search_by_key(&id, Record::id)
            .ok()
            .map(|pos| &self.records[pos])
    }

    /// Builds a record from the model and `datum`, appends it and returns its ID.
    pub fn insert(&mut self, datum: &Fields) -> RecordId {
        let id = self.ids.next_id();
        self.records.push(Record::new(id, &self.model, datum));
        trace!(table = %self.name, id, "record created");
        id
    }

    /// Creates a record and returns the number of records added (always 1).
    pub fn create(&mut self, datum: &Fields) -> usize {
        let before = self.records.len();
        self.insert(datum);
        self.records.len() - before
    }

    /// Returns matching records projected through `values` (default: the model).
    pub fn read(&self, query: &SubQuery) -> ReadOutput {
        let template = query.values.as_ref().unwrap_or(&self.model);
        let predicates = query.where_.as_deref().unwrap_or_default();
        let data: Vec<Fields> = self
            .records
            .iter()
            .filter(|r| match_all(predicates, r))
            .map(|r| r.project(template))
            .collect();
        trace!(table = %self.name, matched = data.len(), "read");
        ReadOutput {
            modified: data.len(),
            data,
        }
    }

    /// Merges `values` into every record matching `where`. Both parts are required.
    pub fn update(&mut self, query: &SubQuery) -> Result<usize> {
        let (values, predicates) = match (&query.values, &query.where_) {
            (Some(values), Some(predicates)) => (values, predicates),
            (None, _) => {
                return Err(Error::malformed_query(format!(
                    "update on table {} requires values",
                    self.name
                )))
            }
            (_, None) => {
                return Err(Error::malformed_query(format!(
                    "update on table {} requires where",
                    self.name
                )))
            }
        };

        let mut modified = 0;
        for record in self.records.iter_mut() {
            if match_all(predicates, record) {
                record.merge(values);
                modified += 1;
            }
        }
        trace!(table = %self.name, modified, "update");
        Ok(modified)
    }

    /// Removes records matching `where`; without `where` the table is cleared.
    pub fn remove(&mut self, query: &SubQuery) -> usize {
        let Some(predicates) = query.where_.as_deref() else {
            let modified = self.records.len();
            self.clear();
            return modified;
        };

        let mut modified = 0;
        // Back to front so earlier indices stay valid
        for idx in (0..self.records.len()).rev() {
            if match_all(predicates, &self.records[idx]) {
                self.records.remove(idx);
                modified += 1;
            }
        }
        trace!(table = %self.name, modified, "remove");
        modified
    }

    /// Removes all records. The identifier sequence keeps counting.
    pub fn clear(&mut self) {
        trace!(table = %self.name, removed = self.records.len(), "clear");
        self.records.clear();
    }
}
