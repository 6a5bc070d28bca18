//! Tessera Storage - Storage layer for the Tessera in-memory store.
//!
//! This crate provides the storage layer including:
//!
//! - `Table`: Ordered record storage with predicate-driven CRUD
//! - `TableCache`: Multi-table management, including on-demand table creation
//!
//! # Example
//!
//! ```rust
//! use tessera_core::{fields, Fields};
//! use tessera_query::{Predicate, SubQuery};
//! use tessera_storage::TableCache;
//!
//! let mut cache = TableCache::new();
//! cache.create_table("users", fields! { "active" => true }).unwrap();
//!
//! let users = cache.get_table_mut("users").unwrap();
//! users.create(&fields! { "name" => "Alice", "age" => 31 });
//! users.create(&fields! { "name" => "Bob", "age" => 17 });
//!
//! let adults = users.read(&SubQuery::filter(vec![Predicate::gte("age", 18)]));
//! assert_eq!(adults.modified, 1);
//! assert_eq!(adults.data[0], fields! { "active" => true });
//! ```

pub mod cache;
pub mod table;

pub use cache::{validate_table_name, TableCache, RESERVED_TABLE_NAME};
pub use table::{ReadOutput, Table};
