//! Filter predicates.
//!
//! A [`Predicate`] is one validated filter criterion: a match mode and the
//! value it compares against. Building a predicate checks the argument;
//! [`Predicate::check`] checks a sequence's contents before any element is
//! tested.

use regex::Regex;

use crate::error::{Result, SequenceError};
use crate::mode::MatchMode;
use crate::ordering::compare_values;
use crate::sequence::all_same_type;
use crate::value::Value;

/// A single filter criterion.
///
/// # Example
///
/// ```
/// use typed_seq::{MatchMode, Predicate, TypedSequence};
///
/// let under_ten = Predicate::new(10, MatchMode::Greater).unwrap();
/// let seq = TypedSequence::from_values([4, 12, 9]);
///
/// let small = seq.filter_by(&under_ten).unwrap();
/// assert_eq!(small.join(","), "4,9");
/// ```
#[derive(Debug, Clone)]
pub struct Predicate {
    criterion: Criterion,
}

#[derive(Debug, Clone)]
enum Criterion {
    Equal(Value),
    Text { mode: MatchMode, needle: String },
    Order { mode: MatchMode, value: Value },
    Regex(Regex),
}

impl Predicate {
    /// Creates a predicate for `mode` against `value`.
    ///
    /// Fails with an invalid-argument error if a text mode gets a non-text
    /// value or an ordering mode gets a value without an ordering.
    pub fn new(value: impl Into<Value>, mode: MatchMode) -> Result<Self> {
        let value = value.into();
        let criterion = match mode {
            MatchMode::Equal => Criterion::Equal(value),
            MatchMode::Contains | MatchMode::StartsWith | MatchMode::EndsWith => match value {
                Value::Text(needle) => Criterion::Text { mode, needle },
                other => {
                    return Err(SequenceError::TextValueRequired {
                        mode: mode.as_str(),
                        actual: other.kind(),
                    })
                }
            },
            MatchMode::Greater
            | MatchMode::GreaterOrEqual
            | MatchMode::Less
            | MatchMode::LessOrEqual => {
                if !value.is_orderable() {
                    return Err(SequenceError::NotComparable {
                        mode,
                        kind: value.kind(),
                    });
                }
                Criterion::Order { mode, value }
            }
        };
        Ok(Predicate { criterion })
    }

    /// Creates a predicate matching text elements against a regular expression.
    ///
    /// The search is unanchored, like [`Regex::is_match`].
    pub fn regex(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Predicate {
            criterion: Criterion::Regex(regex),
        })
    }

    /// Returns the match mode, or `None` for a regex predicate.
    pub fn mode(&self) -> Option<MatchMode> {
        match &self.criterion {
            Criterion::Equal(_) => Some(MatchMode::Equal),
            Criterion::Text { mode, .. } | Criterion::Order { mode, .. } => Some(*mode),
            Criterion::Regex(_) => None,
        }
    }

    /// Returns the display name of this predicate's mode.
    pub fn mode_name(&self) -> &'static str {
        self.mode().map_or("regex", MatchMode::as_str)
    }

    /// Checks that `items` can be filtered by this predicate.
    ///
    /// Text and regex predicates need every element to be text. Ordering
    /// predicates need every element to share one runtime type, and that
    /// type must be the predicate value's. The whole slice is checked, not
    /// only the elements that would match.
    pub fn check(&self, items: &[Value]) -> Result<()> {
        match &self.criterion {
            Criterion::Equal(_) => Ok(()),
            Criterion::Text { .. } | Criterion::Regex(_) => {
                match items.iter().position(|item| !item.is_text()) {
                    Some(index) => Err(SequenceError::NonTextElement {
                        mode: self.mode_name(),
                        index,
                        kind: items[index].kind(),
                    }),
                    None => Ok(()),
                }
            }
            Criterion::Order { mode, value } => {
                if !all_same_type(items) {
                    return Err(SequenceError::NotHomogeneous { mode: *mode });
                }
                match items.first() {
                    Some(first) if !value.same_type(first) => Err(SequenceError::TypeMismatch {
                        mode: *mode,
                        expected: first.kind(),
                        actual: value.kind(),
                    }),
                    _ => Ok(()),
                }
            }
        }
    }

    /// Tests one element against this predicate.
    ///
    /// Elements a checked sequence could not contain (wrong type) never match.
    pub fn matches(&self, element: &Value) -> bool {
        match (&self.criterion, element) {
            (Criterion::Equal(value), _) => element == value,
            (Criterion::Text { mode, needle }, Value::Text(s)) => mode.eval_text(s, needle),
            (Criterion::Regex(regex), Value::Text(s)) => regex.is_match(s),
            // The predicate value is the left operand
            (Criterion::Order { mode, value }, _) => compare_values(value, element)
                .map(|ordering| mode.eval_ordering(ordering))
                .unwrap_or(false),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::value::{Opaque, Timestamp};

    fn texts(items: &[&str]) -> Vec<Value> {
        items.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn equal_matches_any_type() {
        let p = Predicate::new(3, MatchMode::Equal).unwrap();
        assert!(p.matches(&Value::from(3)));
        assert!(!p.matches(&Value::from(3.0)));
        assert!(!p.matches(&Value::from("3")));
        assert!(p.check(&[Value::from("a"), Value::from(1)]).is_ok());
    }

    #[test]
    fn text_modes() {
        let contains = Predicate::new("ll", MatchMode::Contains).unwrap();
        assert!(contains.matches(&Value::from("hello")));
        assert!(!contains.matches(&Value::from("helo")));

        let starts = Predicate::new("he", MatchMode::StartsWith).unwrap();
        assert!(starts.matches(&Value::from("hello")));
        assert!(!starts.matches(&Value::from("the")));

        let ends = Predicate::new("lo", MatchMode::EndsWith).unwrap();
        assert!(ends.matches(&Value::from("hello")));
        assert!(!ends.matches(&Value::from("lol")));
    }

    #[test]
    fn text_mode_rejects_non_text_value() {
        let err = Predicate::new(1, MatchMode::Contains).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(
            err,
            SequenceError::TextValueRequired {
                mode: "contains",
                ..
            }
        ));
    }

    #[test]
    fn text_mode_rejects_non_text_element() {
        let p = Predicate::new("x", MatchMode::EndsWith).unwrap();
        let items = vec![Value::from("x"), Value::from("y"), Value::from(2)];

        let err = p.check(&items).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(matches!(err, SequenceError::NonTextElement { index: 2, .. }));

        assert!(p.check(&texts(&["a", "b"])).is_ok());
        assert!(p.check(&[]).is_ok());
    }

    #[test]
    fn ordering_value_is_left_operand() {
        let gt = Predicate::new(3, MatchMode::Greater).unwrap();
        assert!(gt.matches(&Value::from(2)));
        assert!(!gt.matches(&Value::from(3)));
        assert!(!gt.matches(&Value::from(4)));

        let gte = Predicate::new(3, MatchMode::GreaterOrEqual).unwrap();
        assert!(gte.matches(&Value::from(3)));
        assert!(!gte.matches(&Value::from(4)));

        let lt = Predicate::new(3, MatchMode::Less).unwrap();
        assert!(lt.matches(&Value::from(4)));
        assert!(!lt.matches(&Value::from(3)));

        let lte = Predicate::new(3, MatchMode::LessOrEqual).unwrap();
        assert!(lte.matches(&Value::from(3)));
        assert!(!lte.matches(&Value::from(2)));
    }

    #[test]
    fn ordering_rejects_opaque_value() {
        let err = Predicate::new(Opaque::new("Guid", "a"), MatchMode::Less).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, SequenceError::NotComparable { .. }));
    }

    #[test]
    fn ordering_rejects_mixed_sequence() {
        let p = Predicate::new(3, MatchMode::Greater).unwrap();
        let items = vec![Value::from(1), Value::from("2"), Value::from(3)];

        let err = p.check(&items).unwrap_err();
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn ordering_rejects_type_mismatch() {
        let p = Predicate::new("3", MatchMode::Greater).unwrap();
        let err = p.check(&[Value::from(1), Value::from(2)]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(
            err,
            SequenceError::TypeMismatch {
                mode: MatchMode::Greater,
                ..
            }
        ));

        // No coercion between integers and floats
        let p = Predicate::new(3.0, MatchMode::Less).unwrap();
        assert!(p.check(&[Value::from(1)]).is_err());
    }

    #[test]
    fn ordering_on_timestamps() {
        let p = Predicate::new(Timestamp(2000), MatchMode::Less).unwrap();
        let items = vec![Value::from(Timestamp(1000)), Value::from(Timestamp(3000))];
        assert!(p.check(&items).is_ok());
        assert!(!p.matches(&items[0]));
        assert!(p.matches(&items[1]));
    }

    #[test]
    fn regex_predicate() {
        let p = Predicate::regex(r"^\d+$").unwrap();
        assert!(p.mode().is_none());
        assert_eq!(p.mode_name(), "regex");
        assert!(p.matches(&Value::from("123")));
        assert!(!p.matches(&Value::from("12a")));
        assert!(!p.matches(&Value::from(123)));

        let err = p.check(&[Value::from(1)]).unwrap_err();
        assert!(matches!(err, SequenceError::NonTextElement { mode: "regex", .. }));
    }

    #[test]
    fn regex_invalid_pattern() {
        let err = Predicate::regex("[").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, SequenceError::InvalidRegex(_)));
    }
}
