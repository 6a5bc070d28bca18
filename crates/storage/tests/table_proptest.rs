//! Property-based tests for the single-table CRUD engine.
//!
//! Each property compares a table operation against a naive filter over a
//! copy of the same records.

use proptest::prelude::*;
use tessera_core::{fields, Fields, RecordId, Value, ID_FIELD};
use tessera_query::{Predicate, SubQuery};
use tessera_storage::Table;

/// Strategy for generating ages with plenty of duplicates.
fn age_strategy() -> impl Strategy<Value = i64> {
    0i64..40i64
}

/// Strategy for generating a table populated with `{name, age}` records.
fn table_strategy(max_rows: usize) -> impl Strategy<Value = Table> {
    prop::collection::vec((prop::sample::select(vec!["greg", "charlene", "bertram"]), age_strategy()), 0..max_rows)
        .prop_map(|rows| {
            let mut table = Table::new("people", fields! { "tag" => "none" });
            for (name, age) in rows {
                table.create(&fields! { "name" => name, "age" => age });
            }
            table
        })
}

fn ids(table: &Table) -> Vec<RecordId> {
    table.scan().map(|r| r.id()).collect()
}

fn matches_naive(record: &tessera_core::Record, name: &str, min_age: i64) -> bool {
    record.get("name").and_then(Value::as_str) == Some(name)
        && record.get("age").and_then(Value::as_i64).is_some_and(|a| a >= min_age)
}

proptest! {
    /// Property: identifiers are pairwise distinct and strictly increasing.
    #[test]
    fn ids_strictly_increase(table in table_strategy(50)) {
        let ids = ids(&table);
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: read with AND predicates returns exactly the naively filtered records, in order.
    #[test]
    fn read_matches_naive_filter(table in table_strategy(50), min_age in age_strategy()) {
        let query = SubQuery::new(
            Some(fields! { ID_FIELD => Value::Null }),
            Some(vec![Predicate::eq("name", "greg"), Predicate::gte("age", min_age)]),
        );
        let out = table.read(&query);
        let expected: Vec<Fields> = table
            .scan()
            .filter(|r| matches_naive(r, "greg", min_age))
            .map(|r| fields! { ID_FIELD => r.id() })
            .collect();
        prop_assert_eq!(out.modified, expected.len());
        prop_assert_eq!(out.data, expected);
    }

    /// Property: remove deletes exactly the matching records and keeps survivors in order.
    #[test]
    fn remove_matches_naive_filter(mut table in table_strategy(50), min_age in age_strategy()) {
        let expected: Vec<RecordId> = table
            .scan()
            .filter(|r| !matches_naive(r, "charlene", min_age))
            .map(|r| r.id())
            .collect();
        let before = table.len();

        let removed = table.remove(&SubQuery::filter(vec![
            Predicate::eq("name", "charlene"),
            Predicate::gte("age", min_age),
        ]));

        prop_assert_eq!(removed, before - expected.len());
        prop_assert_eq!(ids(&table), expected);
    }

    /// Property: remove without predicates empties the table and reports its old size.
    #[test]
    fn remove_all_reports_size(mut table in table_strategy(50)) {
        let before = table.len();
        prop_assert_eq!(table.remove(&SubQuery::default()), before);
        prop_assert!(table.is_empty());
    }

    /// Property: update touches only matching records and never reorders or renumbers.
    #[test]
    fn update_touches_only_matches(mut table in table_strategy(50), min_age in age_strategy()) {
        let before_ids = ids(&table);
        let expected = table.scan().filter(|r| matches_naive(r, "bertram", min_age)).count();

        let modified = table
            .update(&SubQuery::new(
                Some(fields! { "tag" => "hit" }),
                Some(vec![Predicate::eq("name", "bertram"), Predicate::gte("age", min_age)]),
            ))
            .unwrap();

        prop_assert_eq!(modified, expected);
        prop_assert_eq!(ids(&table), before_ids);
        let tagged = table.scan().filter(|r| r.get("tag") == Some(&Value::from("hit"))).count();
        prop_assert_eq!(tagged, expected);
    }
}
