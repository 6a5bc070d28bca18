//! Comparison operators.
//!
//! Each operator takes the predicate operand first and the record's field
//! value second. A missing field (`None`) never satisfies a comparison.

use core::cmp::Ordering;
use tessera_core::Value;

/// Strict equality.
pub fn eq(operand: &Value, field: Option<&Value>) -> bool {
    field.is_some_and(|v| v == operand)
}

/// `field < operand`.
pub fn lt(operand: &Value, field: Option<&Value>) -> bool {
    ordering(operand, field).is_some_and(|o| o == Ordering::Less)
}

/// `field <= operand`.
pub fn lte(operand: &Value, field: Option<&Value>) -> bool {
    ordering(operand, field).is_some_and(|o| o != Ordering::Greater)
}

/// `field > operand`.
pub fn gt(operand: &Value, field: Option<&Value>) -> bool {
    ordering(operand, field).is_some_and(|o| o == Ordering::Greater)
}

/// `field >= operand`.
pub fn gte(operand: &Value, field: Option<&Value>) -> bool {
    ordering(operand, field).is_some_and(|o| o != Ordering::Less)
}

/// Invokes a caller-supplied predicate against the field value.
pub fn call<F>(operand: &F, field: Option<&Value>) -> bool
where
    F: Fn(Option<&Value>) -> bool + ?Sized,
{
    operand(field)
}

fn ordering(operand: &Value, field: Option<&Value>) -> Option<Ordering> {
    field.and_then(|v| v.compare(operand))
}
