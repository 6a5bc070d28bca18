//! Fluent query builder.
//!
//! `Query` assembles a `QueryDescriptor` step by step and runs it against the
//! database it was started from.

use crate::database::Database;
use crate::result::QueryResult;
use tessera_core::{merge_fields, Fields, Result, Value};
use tessera_query::{Predicate, QueryDescriptor};

/// A query under construction.
pub struct Query<'db> {
    db: &'db mut Database,
    descriptor: QueryDescriptor,
}

impl<'db> Query<'db> {
    pub(crate) fn new(db: &'db mut Database) -> Self {
        Self {
            db,
            descriptor: QueryDescriptor::default(),
        }
    }

    /// Sets the verb alias.
    pub fn verb(mut self, verb: &str) -> Self {
        self.descriptor.verb = verb.to_string();
        self
    }

    /// Adds a table.
    pub fn table(mut self, name: &str) -> Self {
        self.descriptor.tables.push(name.to_string());
        self
    }

    /// Adds several tables.
    pub fn tables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor
            .tables
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets one value. Keys may be qualified as `table.field`.
    pub fn value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.descriptor
            .values
            .get_or_insert_with(Fields::new)
            .insert(key.to_string(), value.into());
        self
    }

    /// Merges a map of values. Incoming keys win.
    pub fn values(mut self, values: Fields) -> Self {
        merge_fields(
            self.descriptor.values.get_or_insert_with(Fields::new),
            &values,
        );
        self
    }

    /// Adds a predicate. Multiple calls are combined with AND.
    pub fn where_(mut self, predicate: Predicate) -> Self {
        self.descriptor
            .where_
            .get_or_insert_with(Vec::new)
            .push(predicate);
        self
    }

    /// Adds several predicates.
    pub fn wheres(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.descriptor
            .where_
            .get_or_insert_with(Vec::new)
            .extend(predicates);
        self
    }

    /// Merges collation options. They are carried but not interpreted.
    pub fn collate(mut self, collate: Fields) -> Self {
        merge_fields(&mut self.descriptor.collate, &collate);
        self
    }

    /// Returns the descriptor built so far.
    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    /// Consumes the builder and returns its descriptor without running it.
    pub fn into_descriptor(self) -> QueryDescriptor {
        self.descriptor
    }

    /// Runs the query.
    pub fn exec(self) -> Result<QueryResult> {
        self.db.query(&self.descriptor)
    }

    /// Runs the query and passes the outcome to `callback`.
    pub fn callback<F>(self, callback: F)
    where
        F: FnOnce(Result<QueryResult>),
    {
        self.db.query_with(&self.descriptor, callback);
    }
}
