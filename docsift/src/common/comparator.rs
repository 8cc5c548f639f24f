//! Ordering and equality primitives shared by the filters and the sorter.
//!
//! Range comparisons are defined for three operand pairings only: two
//! numbers (integers and decimals mix freely), two strings (byte-wise
//! lexicographic order) and two booleans (`false < true`). Every other
//! pairing is incomparable. An incomparable pair is an unsatisfied condition
//! unless the caller asks for strict comparison, in which case it is a
//! [ErrorKind::TypeMismatch] failure.

use crate::collection::Document;
use crate::common::Value;
use crate::errors::{DocSiftError, DocSiftResult, ErrorKind};
use std::cmp::Ordering;

/// Orders two operands of a range comparison.
///
/// Returns `Ok(None)` when the pair has no order: a NaN on either side, or
/// an incomparable pairing in lenient mode.
fn order_operands(a: &Value, b: &Value, strict: bool) -> DocSiftResult<Option<Ordering>> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Ok(Some(x.as_bytes().cmp(y.as_bytes()))),
        (Value::Bool(x), Value::Bool(y)) => Ok(Some(x.cmp(y))),
        (Value::I64(x), Value::I64(y)) => Ok(Some(x.cmp(y))),
        _ if a.is_number() && b.is_number() => Ok(a.num_partial_cmp(b)),
        _ if strict => {
            log::error!(
                "Cannot compare {} with {}",
                a.type_name(),
                b.type_name()
            );
            Err(DocSiftError::new(
                &format!("Cannot compare {} with {}", a.type_name(), b.type_name()),
                ErrorKind::TypeMismatch,
            ))
        }
        _ => Ok(None),
    }
}

/// Returns `true` if `a < b`.
pub fn lt(a: &Value, b: &Value, strict: bool) -> DocSiftResult<bool> {
    Ok(matches!(order_operands(a, b, strict)?, Some(Ordering::Less)))
}

/// Returns `true` if `a > b`.
pub fn gt(a: &Value, b: &Value, strict: bool) -> DocSiftResult<bool> {
    Ok(matches!(order_operands(a, b, strict)?, Some(Ordering::Greater)))
}

/// Returns `true` if `a <= b`.
pub fn lte(a: &Value, b: &Value, strict: bool) -> DocSiftResult<bool> {
    Ok(matches!(
        order_operands(a, b, strict)?,
        Some(Ordering::Less | Ordering::Equal)
    ))
}

/// Returns `true` if `a >= b`.
pub fn gte(a: &Value, b: &Value, strict: bool) -> DocSiftResult<bool> {
    Ok(matches!(
        order_operands(a, b, strict)?,
        Some(Ordering::Greater | Ordering::Equal)
    ))
}

/// Exact equality without coercion, except that integers and decimals
/// holding the same number are equal.
#[inline]
pub fn equals(a: &Value, b: &Value) -> bool {
    a == b
}

/// Structural equality.
///
/// Arrays must have the same length and equal elements at every position.
/// Documents must have the same key set with deep-equal values under each
/// key; key order is ignored.
pub fn deep_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(l, r)| deep_equals(l, r))
        }
        (Value::Document(x), Value::Document(y)) => documents_equal(x, y),
        _ => equals(a, b),
    }
}

fn documents_equal(a: &Document, b: &Document) -> bool {
    if a.size() != b.size() {
        return false;
    }

    a.iter().all(|(key, left)| match b.get(key) {
        Some(right) => deep_equals(left, right),
        None => false,
    })
}

fn sort_rank(value: Option<&Value>) -> u8 {
    match value {
        None => 0,
        Some(Value::Null) => 1,
        Some(Value::Bool(_)) => 2,
        Some(Value::I64(_) | Value::F64(_)) => 3,
        Some(Value::String(_)) => 4,
        Some(Value::Array(_)) => 5,
        Some(Value::Document(_)) => 6,
    }
}

/// Total order used for sorting.
///
/// Values of different types order by type:
/// `missing < null < bool < number < string < array < document`.
/// Numbers order numerically with NaN last, strings byte-wise, arrays
/// lexicographically by element. Documents are all equal to each other.
pub fn sort_cmp(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let rank = sort_rank(a).cmp(&sort_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) if x.is_number() => x.num_cmp(y).unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.as_bytes().cmp(y.as_bytes()),
        (Some(Value::Array(x)), Some(Value::Array(y))) => {
            for (l, r) in x.iter().zip(y.iter()) {
                let cmp = sort_cmp(Some(l), Some(r));
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => Ordering::Equal,
    }
}
