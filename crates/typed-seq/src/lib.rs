//! typed-seq - Ordered container of heterogeneous values with type-checked filtering.
//!
//! A [`TypedSequence`] holds integers, floats, text, booleans, timestamps and
//! opaque values side by side, in insertion order. It supports:
//!
//! - Construction from values or from delimited text
//! - Joining back into delimited text
//! - Filtering by equality, text matching, regex, or ordering
//! - A homogeneity check (do all elements share one runtime type?)
//!
//! # Quick Start
//!
//! ```rust
//! use typed_seq::{MatchMode, TypedSequence};
//!
//! let names = TypedSequence::from_csv("alpha,beta,gamma").unwrap();
//! assert_eq!(names.len(), 3);
//!
//! let with_l = names.filter("l", MatchMode::Contains).unwrap();
//! assert_eq!(with_l.join("|"), "alpha");
//!
//! let scores = TypedSequence::from_values([1, 2, 3, 4, 5]);
//! let below_three = scores.filter(3, MatchMode::Greater).unwrap();
//! assert_eq!(below_three.to_string(), "1,2");
//! ```
//!
//! # Filter Semantics
//!
//! Ordering modes put the filter value on the left of the comparison:
//! `Greater` keeps the elements the value is greater than.
//!
//! | Mode | Keeps `x` when | Requires |
//! |------|----------------|----------|
//! | `Equal` | `x == value` | nothing |
//! | `Contains` | `x` contains `value` | text value, all elements text |
//! | `StartsWith` | `x` starts with `value` | text value, all elements text |
//! | `EndsWith` | `x` ends with `value` | text value, all elements text |
//! | `Greater` | `x < value` | orderable value, homogeneous sequence of its type |
//! | `GreaterOrEqual` | `x <= value` | orderable value, homogeneous sequence of its type |
//! | `Less` | `x > value` | orderable value, homogeneous sequence of its type |
//! | `LessOrEqual` | `x >= value` | orderable value, homogeneous sequence of its type |
//!
//! Requirements are checked against the whole sequence before filtering. A
//! bad argument is an [`ErrorKind::InvalidArgument`]; contents that do not
//! fit the mode are an [`ErrorKind::InvalidOperation`].
//!
//! ```rust
//! use typed_seq::{ErrorKind, MatchMode, TypedSequence, Value};
//!
//! let mixed = TypedSequence::from_values([Value::from(1), Value::from("x")]);
//! let err = mixed.filter("x", MatchMode::Contains).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidOperation);
//! ```

mod error;
mod mode;
mod ordering;
mod predicate;
mod sequence;
mod value;

// Re-export public API
pub use error::{ErrorKind, Result, SequenceError};
pub use mode::MatchMode;
pub use ordering::{compare_floats, compare_values};
pub use predicate::Predicate;
pub use sequence::{TypedSequence, DEFAULT_DELIMITER};
pub use value::{Opaque, Timestamp, Value, ValueKind};
