//! Ordering between values of the same runtime type.
//!
//! Ordering filters need a total order across the whole sequence, so every
//! orderable variant gets one here, floats included.

use std::cmp::Ordering;

use crate::value::Value;

/// Compares two values of the same runtime type.
///
/// Returns `None` if the types differ or if the type has no ordering
/// ([`Value::Other`]). Text compares byte-wise, never by locale.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(compare_floats(*a, *b)),
        (Value::Text(a), Value::Text(b)) => Some(a.as_str().cmp(b.as_str())),
        (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),

        // Opaque values have no ordering, and mixed types cannot compare
        _ => None,
    }
}

/// Total order over floats: NaN equals NaN and sorts before every number.
pub fn compare_floats(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        },
    }
}
