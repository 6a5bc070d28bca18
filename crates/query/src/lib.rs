//! Tessera Query - Predicates, verbs and query descriptors for Tessera.
//!
//! This crate provides the query vocabulary shared by tables and the router:
//!
//! - `ops`: Comparison operators (`eq`, `lt`, `lte`, `gt`, `gte`, `fn`)
//! - `predicate`: Where-clause predicates and AND matching (`match_all`)
//! - `verb`: CRUD verbs and their string aliases
//! - `descriptor`: The cross-table `QueryDescriptor`

pub mod descriptor;
pub mod ops;
pub mod predicate;
pub mod verb;

pub use descriptor::{QueryDescriptor, SubQuery};
pub use predicate::{match_all, Operand, Operator, Predicate, PredicateFn};
pub use verb::Verb;
