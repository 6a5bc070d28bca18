//! Cache management for Tessera.
//!
//! This module provides the `TableCache` struct which owns every table by name.

use crate::table::Table;
use hashbrown::HashMap;
use tessera_core::{Error, Fields, Result};
use tracing::debug;

/// Name of the count entry in serialized query results; no table may use it.
pub const RESERVED_TABLE_NAME: &str = "modified";

/// Checks that `name` can be used as a table name.
///
/// Names must be non-empty, contain no `.` (it separates the table qualifier
/// in `table.field` keys) and must not be `modified`.
pub fn validate_table_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_config("table name must not be empty"));
    }
    if name.contains('.') {
        return Err(Error::invalid_config(format!(
            "table name {} must not contain '.'",
            name
        )));
    }
    if name == RESERVED_TABLE_NAME {
        return Err(Error::invalid_config(format!(
            "table name {} is reserved",
            name
        )));
    }
    Ok(())
}

/// Cache for managing multiple tables.
#[derive(Debug, Default)]
pub struct TableCache {
    /// Table name → Table mapping.
    tables: HashMap<String, Table>,
}

impl TableCache {
    /// Creates a new empty table cache.
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Creates a table in the cache.
    pub fn create_table(&mut self, name: &str, model: Fields) -> Result<()> {
        validate_table_name(name)?;
        if self.tables.contains_key(name) {
            return Err(Error::invalid_config(format!(
                "Table already exists: {}",
                name
            )));
        }
        debug!(table = name, fields = model.len(), "table created");
        self.tables.insert(name.to_string(), Table::new(name, model));
        Ok(())
    }

    /// Makes sure every named table exists.
    ///
    /// Missing tables are created empty when `auto_create` is set; otherwise
    /// the first missing name is reported. Either way nothing is created
    /// unless every missing name is acceptable.
    pub fn ensure_tables<S: AsRef<str>>(&mut self, names: &[S], auto_create: bool) -> Result<()> {
        let missing: Vec<&str> = names
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| !self.has_table(n))
            .collect();
        if let Some(first) = missing.first() {
            if !auto_create {
                return Err(Error::unknown_table(*first));
            }
        }
        for name in &missing {
            validate_table_name(name)?;
        }
        for name in missing {
            if !self.has_table(name) {
                self.create_table(name, Fields::new())?;
            }
        }
        Ok(())
    }

    /// Gets a reference to a table.
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Gets a mutable reference to a table.
    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Gets a mutable reference to a table, failing if it does not exist.
    pub fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::unknown_table(name))
    }

    /// Returns the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Returns all table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Checks if a table exists.
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Clears all tables. The tables themselves are kept.
    pub fn clear(&mut self) {
        for table in self.tables.values_mut() {
            table.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::fields;

    #[test]
    fn test_cache_create_table() {
        let mut cache = TableCache::new();
        assert!(cache.create_table("users", Fields::new()).is_ok());
        assert!(cache.has_table("users"));
    }

    #[test]
    fn test_cache_create_duplicate_table() {
        let mut cache = TableCache::new();
        cache.create_table("users", Fields::new()).unwrap();
        let result = cache.create_table("users", Fields::new());
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_cache_keeps_model() {
        let mut cache = TableCache::new();
        cache.create_table("users", fields! { "active" => true }).unwrap();
        assert_eq!(cache.get_table("users").unwrap().model().len(), 1);
    }

    #[test]
    fn test_ensure_tables_auto_create() {
        let mut cache = TableCache::new();
        cache.create_table("users", Fields::new()).unwrap();
        cache.ensure_tables(&["users", "orders"], true).unwrap();
        assert_eq!(cache.table_names(), vec!["orders", "users"]);
    }

    #[test]
    fn test_ensure_tables_without_auto_create() {
        let mut cache = TableCache::new();
        cache.create_table("users", Fields::new()).unwrap();

        let err = cache.ensure_tables(&["users", "orders"], false).unwrap_err();
        match err {
            Error::UnknownTable { name } => assert_eq!(name, "orders"),
            other => panic!("Wrong error type: {other:?}"),
        }
        assert_eq!(cache.table_count(), 1);
        assert!(cache.ensure_tables(&["users"], false).is_ok());
    }

    #[test]
    fn test_bad_table_names_rejected() {
        let mut cache = TableCache::new();
        for name in ["", "users.archive", "modified"] {
            assert!(matches!(
                cache.create_table(name, Fields::new()),
                Err(Error::InvalidConfig { .. })
            ));
        }
        assert_eq!(cache.table_count(), 0);
    }

    #[test]
    fn test_ensure_tables_validates_before_creating() {
        let mut cache = TableCache::new();
        let err = cache.ensure_tables(&["users", "a.b"], true).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
        assert_eq!(cache.table_count(), 0);

        assert!(cache.ensure_tables(&[""], true).is_err());
        assert!(!cache.has_table(""));
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = TableCache::new();
        cache.ensure_tables(&["users"], true).unwrap();
        cache.get_table_mut("users").unwrap().create(&fields! { "name" => "Alice" });

        cache.clear();
        // Tables still exist, just empty
        assert!(cache.has_table("users"));
        assert!(cache.get_table("users").unwrap().is_empty());
    }

    #[test]
    fn test_table_mut_missing_table() {
        let mut cache = TableCache::new();
        assert!(matches!(
            cache.table_mut("nope"),
            Err(Error::UnknownTable { .. })
        ));
    }
}
