//! Database - Main entry point for Tessera operations.
//!
//! This module provides the `Database` struct which owns every table, resolves
//! verb aliases and runs routed queries table by table.

use crate::config::{DatabaseOptions, SubQueryPolicy, TableConfig};
use crate::query_builder::Query;
use crate::result::QueryResult;
use crate::router;
use tessera_core::{Fields, Result};
use tessera_query::{QueryDescriptor, Verb};
use tessera_storage::{Table, TableCache};
use tracing::{debug, warn};

/// The main database interface.
///
/// Provides methods for:
/// - Declaring tables with model templates
/// - Running query descriptors (create, read, update, remove and their aliases)
/// - Building queries fluently
///
/// Tables are processed one at a time. A failure stops the remaining tables
/// but changes already applied to earlier tables stay in place.
#[derive(Debug)]
pub struct Database {
    cache: TableCache,
    auto_create: bool,
    policy: SubQueryPolicy,
}

impl Database {
    /// Creates an empty database with default options.
    pub fn new() -> Self {
        Self {
            cache: TableCache::new(),
            auto_create: true,
            policy: SubQueryPolicy::default(),
        }
    }

    /// Creates a database and declares the configured tables.
    pub fn with_options(options: DatabaseOptions) -> Result<Self> {
        options.validate()?;
        let mut db = Self {
            cache: TableCache::new(),
            auto_create: options.auto_create,
            policy: options.sub_query_policy,
        };
        for table in options.tables {
            db.create_table(table)?;
        }
        debug!(
            tables = db.cache.table_count(),
            auto_create = db.auto_create,
            "database opened"
        );
        Ok(db)
    }

    /// Creates a database from JSON options.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::with_options(DatabaseOptions::from_json(json)?)
    }

    /// Declares a table.
    pub fn create_table(&mut self, config: TableConfig) -> Result<()> {
        self.cache.create_table(&config.name, config.model)
    }

    /// Gets a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.cache.get_table(name)
    }

    /// Returns all table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        self.cache.table_names()
    }

    /// Returns the number of tables.
    pub fn table_count(&self) -> usize {
        self.cache.table_count()
    }

    /// Checks if a table exists.
    pub fn has_table(&self, name: &str) -> bool {
        self.cache.has_table(name)
    }

    /// Returns whether unknown tables are created on first reference.
    pub fn auto_create(&self) -> bool {
        self.auto_create
    }

    /// Clears data from all tables. Tables are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Makes sure every named table exists, creating missing ones if allowed.
    pub fn ensure_tables_exist(&mut self, names: &[String]) -> Result<()> {
        self.cache.ensure_tables(names, self.auto_create)
    }

    /// Resolves the descriptor's verb alias and runs it.
    pub fn query(&mut self, descriptor: &QueryDescriptor) -> Result<QueryResult> {
        let result = descriptor
            .verb
            .parse::<Verb>()
            .and_then(|verb| self.dispatch(verb, descriptor));
        if let Err(err) = &result {
            warn!(verb = %descriptor.verb, tables = ?descriptor.tables, error = %err, "query failed");
        }
        result
    }

    /// Runs a query and hands the single outcome to `callback`.
    pub fn query_with<F>(&mut self, descriptor: &QueryDescriptor, callback: F)
    where
        F: FnOnce(Result<QueryResult>),
    {
        callback(self.query(descriptor));
    }

    /// Runs a descriptor as a create, whatever its verb string says.
    pub fn create(&mut self, descriptor: &QueryDescriptor) -> Result<QueryResult> {
        self.dispatch(Verb::Create, descriptor)
    }

    /// Runs a descriptor as a read.
    pub fn read(&mut self, descriptor: &QueryDescriptor) -> Result<QueryResult> {
        self.dispatch(Verb::Read, descriptor)
    }

    /// Runs a descriptor as an update.
    pub fn update(&mut self, descriptor: &QueryDescriptor) -> Result<QueryResult> {
        self.dispatch(Verb::Update, descriptor)
    }

    /// Runs a descriptor as a remove.
    pub fn remove(&mut self, descriptor: &QueryDescriptor) -> Result<QueryResult> {
        self.dispatch(Verb::Remove, descriptor)
    }

    /// Starts an empty fluent query.
    pub fn query_builder(&mut self) -> Query<'_> {
        Query::new(self)
    }

    /// Starts a read against one table.
    pub fn select(&mut self, table: &str) -> Query<'_> {
        Query::new(self).verb("read").table(table)
    }

    /// Starts a create against one table.
    pub fn insert(&mut self, table: &str) -> Query<'_> {
        Query::new(self).verb("create").table(table)
    }

    /// Starts an update against one table.
    pub fn patch(&mut self, table: &str) -> Query<'_> {
        Query::new(self).verb("update").table(table)
    }

    /// Starts a remove against one table.
    pub fn delete(&mut self, table: &str) -> Query<'_> {
        Query::new(self).verb("remove").table(table)
    }

    fn dispatch(&mut self, verb: Verb, descriptor: &QueryDescriptor) -> Result<QueryResult> {
        self.ensure_tables_exist(&descriptor.tables)?;
        let parts = router::split_query(descriptor, self.policy)?;
        debug!(%verb, tables = parts.len(), "dispatching query");

        let empty = Fields::new();
        let mut result = QueryResult::default();
        for (name, sub) in &parts {
            let table = self.cache.table_mut(name)?;
            match verb {
                Verb::Create => {
                    result.modified += table.create(sub.values.as_ref().unwrap_or(&empty));
                }
                Verb::Read => {
                    let out = table.read(sub);
                    result.modified += out.modified;
                    result.data.insert(name.clone(), out.data);
                }
                Verb::Update => result.modified += table.update(sub)?,
                Verb::Remove => result.modified += table.remove(sub),
            }
        }
        Ok(result)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
