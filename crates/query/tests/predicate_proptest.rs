//! Property-based tests for predicate evaluation.
//!
//! These tests check the comparison operators and AND matching against
//! straightforward reference computations on random inputs.

use proptest::prelude::*;
use tessera_core::{fields, Fields, Record, Value};
use tessera_query::{match_all, Predicate};

/// Strategy for generating small integers so that collisions are common.
fn value_strategy() -> impl Strategy<Value = i64> {
    -20i64..20i64
}

/// Strategy for generating records with `a` and `b` integer fields, `b` sometimes missing.
fn record_strategy() -> impl Strategy<Value = Record> {
    (value_strategy(), prop::option::of(value_strategy())).prop_map(|(a, b)| {
        let mut datum: Fields = fields! { "a" => a };
        if let Some(b) = b {
            datum.insert("b".into(), Value::from(b));
        }
        Record::new(1, &Fields::new(), &datum)
    })
}

proptest! {
    /// Property: on comparable values exactly one of `lt`, `eq`, `gt` holds.
    #[test]
    fn ordering_trichotomy(x in value_strategy(), y in value_strategy()) {
        let rec = Record::new(1, &Fields::new(), &fields! { "a" => x });
        let lt = Predicate::lt("a", y).eval(&rec);
        let eq = Predicate::eq("a", y).eval(&rec);
        let gt = Predicate::gt("a", y).eval(&rec);
        prop_assert_eq!([lt, eq, gt].iter().filter(|b| **b).count(), 1);
        prop_assert_eq!(Predicate::lte("a", y).eval(&rec), lt || eq);
        prop_assert_eq!(Predicate::gte("a", y).eval(&rec), gt || eq);
    }

    /// Property: integer and float operands order identically.
    #[test]
    fn int_and_float_operands_agree(x in value_strategy(), y in value_strategy()) {
        let rec = Record::new(1, &Fields::new(), &fields! { "a" => x });
        prop_assert_eq!(
            Predicate::lt("a", y).eval(&rec),
            Predicate::lt("a", y as f64).eval(&rec)
        );
        prop_assert_eq!(
            Predicate::eq("a", y).eval(&rec),
            Predicate::eq("a", y as f64).eval(&rec)
        );
    }

    /// Property: match_all equals the conjunction of the individual predicates.
    #[test]
    fn match_all_is_conjunction(
        rec in record_strategy(),
        lo in value_strategy(),
        hi in value_strategy(),
    ) {
        let predicates = vec![Predicate::gte("a", lo), Predicate::lt("b", hi)];
        let expected = predicates.iter().all(|p| p.eval(&rec));
        prop_assert_eq!(match_all(&predicates, &rec), expected);

        let a = rec.get("a").and_then(Value::as_i64).unwrap();
        let b = rec.get("b").and_then(Value::as_i64);
        prop_assert_eq!(expected, a >= lo && b.is_some_and(|b| b < hi));
    }

    /// Property: a missing field fails every comparison operator.
    #[test]
    fn missing_field_fails_comparisons(x in value_strategy()) {
        let rec = Record::new(1, &Fields::new(), &Fields::new());
        prop_assert!(!Predicate::eq("a", x).eval(&rec));
        prop_assert!(!Predicate::lt("a", x).eval(&rec));
        prop_assert!(!Predicate::lte("a", x).eval(&rec));
        prop_assert!(!Predicate::gt("a", x).eval(&rec));
        prop_assert!(!Predicate::gte("a", x).eval(&rec));
    }
}
