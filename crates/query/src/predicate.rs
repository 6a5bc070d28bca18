//! Where-clause predicates.

use crate::ops;
use core::fmt;
use core::str::FromStr;
use std::rc::Rc;
use tessera_core::{Error, Fields, Record, Value};

/// Caller-supplied test used by the `fn` operator.
pub type PredicateFn = Rc<dyn Fn(Option<&Value>) -> bool>;

/// Comparison operator of a predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
    Fn,
}

impl Operator {
    /// Returns the wire name of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Fn => "fn",
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Operator::Eq),
            "lt" => Ok(Operator::Lt),
            "lte" => Ok(Operator::Lte),
            "gt" => Ok(Operator::Gt),
            "gte" => Ok(Operator::Gte),
            "fn" => Ok(Operator::Fn),
            other => Err(Error::invalid_operator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The right-hand side of a predicate.
#[derive(Clone)]
pub enum Operand {
    /// A literal compared against the field.
    Value(Value),
    /// A one-argument test, only meaningful with `Operator::Fn`.
    Fn(PredicateFn),
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Operand::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

/// A single `{operator, field, operand}` test against one record field.
///
/// At the cross-table level `field` may be qualified as `table.field`; by the
/// time a predicate reaches a table it names a bare field.
#[derive(Clone, Debug)]
pub struct Predicate {
    pub operator: Operator,
    pub field: String,
    pub operand: Operand,
}

impl Predicate {
    pub fn new(operator: Operator, field: impl Into<String>, operand: Operand) -> Self {
        Self {
            operator,
            field: field.into(),
            operand,
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Operator::Eq, field, Operand::Value(value.into()))
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Operator::Lt, field, Operand::Value(value.into()))
    }

    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Operator::Lte, field, Operand::Value(value.into()))
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Operator::Gt, field, Operand::Value(value.into()))
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Operator::Gte, field, Operand::Value(value.into()))
    }

    /// Creates an `fn` predicate from a closure.
    pub fn func<F>(field: impl Into<String>, test: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + 'static,
    {
        Self::new(Operator::Fn, field, Operand::Fn(Rc::new(test)))
    }

    /// Returns a copy of this predicate testing a different field.
    pub fn with_field(&self, field: impl Into<String>) -> Self {
        Self {
            operator: self.operator,
            field: field.into(),
            operand: self.operand.clone(),
        }
    }

    /// Tests a field value. An operator paired with the wrong operand kind is false.
    pub fn test(&self, value: Option<&Value>) -> bool {
        match (&self.operand, self.operator) {
            (Operand::Value(v), Operator::Eq) => ops::eq(v, value),
            (Operand::Value(v), Operator::Lt) => ops::lt(v, value),
            (Operand::Value(v), Operator::Lte) => ops::lte(v, value),
            (Operand::Value(v), Operator::Gt) => ops::gt(v, value),
            (Operand::Value(v), Operator::Gte) => ops::gte(v, value),
            (Operand::Fn(f), Operator::Fn) => ops::call(f.as_ref(), value),
            _ => false,
        }
    }

    /// Evaluates the predicate against a field map.
    pub fn eval_fields(&self, fields: &Fields) -> bool {
        self.test(fields.get(&self.field))
    }

    /// Evaluates the predicate against a record.
    pub fn eval(&self, record: &Record) -> bool {
        self.eval_fields(record.fields())
    }
}

/// Returns true only if every predicate holds. An empty list matches everything.
pub fn match_all(predicates: &[Predicate], record: &Record) -> bool {
    predicates.iter().all(|p| p.eval(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::fields;

    fn record(datum: Fields) -> Record {
        Record::new(1, &Fields::new(), &datum)
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("eq".parse::<Operator>().unwrap(), Operator::Eq);
        assert_eq!("gte".parse::<Operator>().unwrap(), Operator::Gte);
        assert_eq!("fn".parse::<Operator>().unwrap(), Operator::Fn);
        assert!(matches!(
            "like".parse::<Operator>(),
            Err(Error::InvalidOperator { .. })
        ));
        assert!("EQ".parse::<Operator>().is_err());
    }

    #[test]
    fn test_value_predicate() {
        let rec = record(fields! { "name" => "greg", "age" => 25 });
        assert!(Predicate::eq("name", "greg").eval(&rec));
        assert!(!Predicate::eq("name", "bertram").eval(&rec));
        assert!(Predicate::gte("age", 18).eval(&rec));
        assert!(!Predicate::lt("age", 18).eval(&rec));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let rec = record(fields! { "name" => "greg" });
        assert!(!Predicate::eq("age", Value::Null).eval(&rec));
        assert!(!Predicate::gte("age", 0).eval(&rec));
    }

    #[test]
    fn test_fn_predicate() {
        let rec = record(fields! { "name" => "charlene" });
        let long_name = Predicate::func("name", |v| v.and_then(Value::as_str).is_some_and(|s| s.len() > 5));
        assert!(long_name.eval(&rec));

        let absent = Predicate::func("ssn", |v| v.is_none());
        assert!(absent.eval(&rec));
    }

    #[test]
    fn test_mismatched_operand_kind() {
        let rec = record(fields! { "age" => 7 });
        let fn_with_literal = Predicate::new(Operator::Fn, "age", Operand::from(Value::from(7)));
        assert!(!fn_with_literal.eval(&rec));

        let eq_with_fn = Predicate::new(Operator::Eq, "age", Operand::Fn(Rc::new(|_: Option<&Value>| true)));
        assert!(!eq_with_fn.eval(&rec));
    }

    #[test]
    fn test_with_field() {
        let p = Predicate::gt("users.age", 18);
        let bare = p.with_field("age");
        assert_eq!(bare.field, "age");
        assert_eq!(bare.operator, Operator::Gt);
        assert_eq!(p.field, "users.age");
    }

    #[test]
    fn test_match_all() {
        let predicates = vec![Predicate::eq("name", "greg"), Predicate::gte("age", 18)];
        assert!(!match_all(&predicates, &record(fields! { "name" => "greg", "age" => 7 })));
        assert!(match_all(&predicates, &record(fields! { "name" => "greg", "age" => 25 })));
        assert!(!match_all(&predicates, &record(fields! { "name" => "charlene", "age" => 27 })));
    }

    #[test]
    fn test_match_all_empty_is_vacuous() {
        assert!(match_all(&[], &record(Fields::new())));
    }

    #[test]
    fn test_operand_debug() {
        let p = Predicate::func("x", |_| true);
        assert!(format!("{:?}", p.operand).contains("Fn"));
    }
}
