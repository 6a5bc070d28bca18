//! Splits a cross-table query descriptor into per-table sub-queries.
//!
//! Qualified keys (`table.field`) belong to the named table and lose their
//! qualifier. Bare keys are deferred and copied into every table listed in the
//! descriptor once all qualified keys are placed, so a bare key overrides a
//! qualified key naming the same field.

use crate::config::SubQueryPolicy;
use std::collections::BTreeMap;
use tessera_core::{Error, Fields, Result, Value};
use tessera_query::{Predicate, QueryDescriptor, SubQuery};

/// Values routed to each table, keyed by table name.
pub type ValuesByTable = BTreeMap<String, Fields>;

/// Predicates routed to each table, keyed by table name.
pub type ConditionsByTable = BTreeMap<String, Vec<Predicate>>;

/// Splits `table.field` into its parts. Bare names return `None`.
///
/// Only the first `.` separates the table, so `a.b.c` targets field `b.c` of `a`.
pub fn split_qualified(key: &str) -> Option<(&str, &str)> {
    key.split_once('.')
}

fn ensure_listed(query: &QueryDescriptor, table: &str) -> Result<()> {
    if query.tables.iter().any(|t| t == table) {
        Ok(())
    } else {
        Err(Error::unknown_table(table))
    }
}

/// Routes `query.values` to tables.
pub fn extract_query_values(query: &QueryDescriptor) -> Result<ValuesByTable> {
    let mut by_table = ValuesByTable::new();
    let Some(values) = &query.values else {
        return Ok(by_table);
    };

    let mut deferred: Vec<(&String, &Value)> = Vec::new();
    for (key, value) in values {
        match split_qualified(key) {
            Some((table, field)) => {
                ensure_listed(query, table)?;
                by_table
                    .entry(table.to_string())
                    .or_default()
                    .insert(field.to_string(), value.clone());
            }
            None => deferred.push((key, value)),
        }
    }

    if !deferred.is_empty() {
        for table in &query.tables {
            let entry = by_table.entry(table.clone()).or_default();
            for (key, value) in &deferred {
                entry.insert((*key).clone(), (*value).clone());
            }
        }
    }
    Ok(by_table)
}

/// Routes `query.where_` to tables.
///
/// Qualified predicates are rewritten to the bare field name. Deferred
/// predicates are copied unchanged after the qualified ones.
pub fn extract_query_conditions(query: &QueryDescriptor) -> Result<ConditionsByTable> {
    let mut by_table = ConditionsByTable::new();
    let Some(predicates) = &query.where_ else {
        return Ok(by_table);
    };

    let mut deferred: Vec<&Predicate> = Vec::new();
    for predicate in predicates {
        match split_qualified(&predicate.field) {
            Some((table, field)) => {
                ensure_listed(query, table)?;
                by_table
                    .entry(table.to_string())
                    .or_default()
                    .push(predicate.with_field(field));
            }
            None => deferred.push(predicate),
        }
    }

    if !deferred.is_empty() {
        for table in &query.tables {
            by_table
                .entry(table.clone())
                .or_default()
                .extend(deferred.iter().map(|p| (*p).clone()));
        }
    }
    Ok(by_table)
}

/// Combines routed values and conditions into one sub-query per table.
///
/// With `Union`, every table listed in `query` gets a sub-query. A part the
/// query carries is present in every sub-query, empty for tables nothing was
/// routed to; a part the query lacks stays absent. With `Intersection`, only
/// tables present in both maps are kept.
pub fn merge_query_parts(
    query: &QueryDescriptor,
    mut values: ValuesByTable,
    mut conditions: ConditionsByTable,
    policy: SubQueryPolicy,
) -> BTreeMap<String, SubQuery> {
    match policy {
        SubQueryPolicy::Union => {
            let mut parts = BTreeMap::new();
            for name in &query.tables {
                if parts.contains_key(name) {
                    continue;
                }
                let v = values
                    .remove(name)
                    .or_else(|| query.values.as_ref().map(|_| Fields::new()));
                let c = conditions
                    .remove(name)
                    .or_else(|| query.where_.as_ref().map(|_| Vec::new()));
                parts.insert(name.clone(), SubQuery::new(v, c));
            }
            parts
        }
        SubQueryPolicy::Intersection => values
            .into_iter()
            .filter_map(|(name, v)| {
                let c = conditions.remove(&name)?;
                Some((name, SubQuery::new(Some(v), Some(c))))
            })
            .collect(),
    }
}

/// Runs the full split: values, then conditions, then merge.
pub fn split_query(
    query: &QueryDescriptor,
    policy: SubQueryPolicy,
) -> Result<BTreeMap<String, SubQuery>> {
    let values = extract_query_values(query)?;
    let conditions = extract_query_conditions(query)?;
    Ok(merge_query_parts(query, values, conditions, policy))
}
