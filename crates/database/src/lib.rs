//! Tessera Database - Cross-table queries for the Tessera in-memory store.
//!
//! This crate provides the public API:
//!
//! - `Database`: Owns the tables, resolves verb aliases and runs queries
//! - `router`: Splits a cross-table `QueryDescriptor` into per-table sub-queries
//! - `Query`: Fluent builder that assembles a descriptor and runs it
//! - `DatabaseOptions` / `TableConfig`: Construction-time configuration
//! - `QueryResult`: Total `modified` count plus per-table read data
//!
//! # Example
//!
//! ```rust
//! use tessera_core::fields;
//! use tessera_database::{Database, DatabaseOptions, TableConfig};
//! use tessera_query::Predicate;
//!
//! let mut db = Database::with_options(
//!     DatabaseOptions::default()
//!         .table(TableConfig::new("users", fields! { "active" => true }))
//!         .table(TableConfig::new("orders", fields! {})),
//! )
//! .unwrap();
//!
//! db.query_builder()
//!     .verb("insert")
//!     .tables(["users", "orders"])
//!     .value("users.name", "Alice")
//!     .value("orders.total", 10)
//!     .exec()
//!     .unwrap();
//!
//! let result = db
//!     .query_builder()
//!     .verb("select")
//!     .tables(["users", "orders"])
//!     .values(fields! { "users.name" => "", "orders.total" => 0 })
//!     .where_(Predicate::gte("orders.total", 5))
//!     .exec()
//!     .unwrap();
//!
//! assert_eq!(result.modified, 2);
//! assert_eq!(result.table("users").unwrap(), &[fields! { "name" => "Alice" }]);
//! assert_eq!(result.table("orders").unwrap(), &[fields! { "total" => 10 }]);
//! ```

pub mod config;
pub mod database;
pub mod query_builder;
pub mod result;
pub mod router;

pub use config::{DatabaseOptions, SubQueryPolicy, TableConfig};
pub use database::Database;
pub use query_builder::Query;
pub use result::QueryResult;
