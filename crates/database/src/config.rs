//! Construction-time configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tessera_core::{Error, Fields, Result};
use tessera_storage::validate_table_name;

/// Which tables of a split query are executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubQueryPolicy {
    /// Every table listed in the query runs. A part present in the query
    /// reaches every table, empty if nothing was routed to it; an absent part
    /// stays absent and the table applies its own defaults.
    ///
    /// An empty `where` matches every record. A `remove` or `update` whose
    /// predicates all name `users` therefore hits every record of the other
    /// listed tables. List only the tables the predicates should scope.
    #[default]
    Union,
    /// Only tables that received both values and conditions run.
    Intersection,
}

/// A table declared up front.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TableConfig {
    pub name: String,
    /// Default fields applied to every new record.
    #[serde(default)]
    pub model: Fields,
}

impl TableConfig {
    pub fn new(name: impl Into<String>, model: Fields) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }

    /// Rejects empty, dotted or reserved names.
    pub fn validate(&self) -> Result<()> {
        validate_table_name(&self.name)
    }
}

/// Options for building a `Database`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseOptions {
    /// Create unknown tables on first reference instead of failing.
    #[serde(alias = "autoCollection")]
    pub auto_create: bool,
    pub tables: Vec<TableConfig>,
    pub sub_query_policy: SubQueryPolicy,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            auto_create: true,
            tables: Vec::new(),
            sub_query_policy: SubQueryPolicy::default(),
        }
    }
}

impl DatabaseOptions {
    /// Parses options from JSON, e.g.
    /// `{"auto_create": false, "tables": [{"name": "users", "model": {"active": true}}]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: DatabaseOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn auto_create(mut self, enabled: bool) -> Self {
        self.auto_create = enabled;
        self
    }

    pub fn table(mut self, config: TableConfig) -> Self {
        self.tables.push(config);
        self
    }

    pub fn sub_query_policy(mut self, policy: SubQueryPolicy) -> Self {
        self.sub_query_policy = policy;
        self
    }

    /// Rejects invalid or duplicate table names.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for table in &self.tables {
            table.validate()?;
            if !seen.insert(table.name.as_str()) {
                return Err(Error::invalid_config(format!(
                    "duplicate table {}",
                    table.name
                )));
            }
        }
        Ok(())
    }
}
