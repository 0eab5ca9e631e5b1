//! The sequence container and its executor methods.
//!
//! [`TypedSequence`] owns an ordered list of [`Value`]s. Filtering validates
//! the whole sequence first, then builds a new sequence from the matches.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Result, SequenceError};
use crate::mode::MatchMode;
use crate::predicate::Predicate;
use crate::value::{Value, ValueKind};

/// Delimiter used when none is given: by `from_csv`, `FromStr` and `Display`.
pub const DEFAULT_DELIMITER: &str = ",";

/// Returns `true` if every value has the identical runtime type.
///
/// An empty slice is homogeneous.
pub(crate) fn all_same_type(items: &[Value]) -> bool {
    match items.split_first() {
        Some((first, rest)) => rest.iter().all(|item| item.same_type(first)),
        None => true,
    }
}

/// Ordered container of heterogeneous values.
///
/// The container is not internally synchronized. Share it across threads
/// behind a lock if it is mutated.
///
/// # Example
///
/// ```
/// use typed_seq::{MatchMode, TypedSequence};
///
/// let seq = TypedSequence::from_values([1, 2, 3, 4, 5]);
///
/// // Keep elements that 3 is greater than
/// let low = seq.filter(3, MatchMode::Greater).unwrap();
/// assert_eq!(low.join(","), "1,2");
///
/// // The source is left untouched
/// assert_eq!(seq.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedSequence {
    items: Vec<Value>,
}

impl TypedSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        TypedSequence::default()
    }

    /// Creates an empty sequence.
    pub fn empty() -> Self {
        TypedSequence::default()
    }

    /// Creates a sequence holding exactly `values`, in order.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().collect()
    }

    /// Parses `text` into text elements split on the literal `delimiter`.
    ///
    /// There is no quoting or escaping, and empty segments are kept.
    /// Fails if `text` or `delimiter` is empty.
    pub fn from_delimited_text(text: &str, delimiter: &str) -> Result<Self> {
        if text.is_empty() {
            debug!(delimiter, "rejected empty delimited text");
            return Err(SequenceError::EmptyText);
        }
        if delimiter.is_empty() {
            debug!("rejected empty delimiter");
            return Err(SequenceError::EmptyDelimiter);
        }
        Ok(text.split(delimiter).collect())
    }

    /// Like [`from_delimited_text`](Self::from_delimited_text), for text that may be absent.
    pub fn from_optional_text(text: Option<&str>, delimiter: &str) -> Result<Self> {
        match text {
            Some(text) => TypedSequence::from_delimited_text(text, delimiter),
            None => Err(SequenceError::MissingText),
        }
    }

    /// Parses comma-separated text.
    pub fn from_csv(text: &str) -> Result<Self> {
        TypedSequence::from_delimited_text(text, DEFAULT_DELIMITER)
    }

    // ========================================================================
    // Container operations
    // ========================================================================

    /// Appends a value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Inserts a value at `index`, shifting later elements.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        self.items.insert(index, value.into());
    }

    /// Removes and returns the element at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove_value(&mut self, value: &Value) -> bool {
        match self.position(value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Returns `true` if an element equals `value`.
    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn position(&self, value: &Value) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Joins the text form of every element with `separator`.
    ///
    /// An empty sequence joins to the empty string.
    pub fn join(&self, separator: &str) -> String {
        self.items
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    // ========================================================================
    // Homogeneity
    // ========================================================================

    /// Returns `true` if every element has the identical runtime type.
    ///
    /// An empty sequence is homogeneous.
    pub fn is_homogeneous(&self) -> bool {
        all_same_type(&self.items)
    }

    /// Returns the kind shared by all elements.
    ///
    /// `None` if the sequence is empty or not homogeneous.
    pub fn common_kind(&self) -> Option<ValueKind> {
        match self.items.first() {
            Some(first) if self.is_homogeneous() => Some(first.kind()),
            _ => None,
        }
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Returns a new sequence of the elements matching `value` under `mode`.
    ///
    /// The whole sequence is validated before any element is tested, so a
    /// failing call never produces a partial result. Matches keep their
    /// relative order.
    pub fn filter(&self, value: impl Into<Value>, mode: MatchMode) -> Result<TypedSequence> {
        let predicate = self.predicate(value, mode)?;
        self.filter_by(&predicate)
    }

    /// Filters with a mode given by name, as accepted by [`MatchMode::from_str`].
    pub fn filter_named(&self, value: impl Into<Value>, mode: &str) -> Result<TypedSequence> {
        let mode = mode.parse::<MatchMode>().inspect_err(|err| {
            debug!(len = self.len(), error = %err, "filter rejected");
        })?;
        self.filter(value, mode)
    }

    /// Returns a new sequence of the text elements matching `pattern`.
    pub fn filter_regex(&self, pattern: &str) -> Result<TypedSequence> {
        let predicate = Predicate::regex(pattern).inspect_err(|err| {
            debug!(mode = "regex", len = self.len(), error = %err, "filter rejected");
        })?;
        self.filter_by(&predicate)
    }

    /// Returns a new sequence of the elements matching `predicate`.
    pub fn filter_by(&self, predicate: &Predicate) -> Result<TypedSequence> {
        self.check(predicate)?;

        let items: Vec<Value> = self
            .items
            .iter()
            .filter(|item| predicate.matches(item))
            .cloned()
            .collect();

        trace!(
            mode = predicate.mode_name(),
            len = self.len(),
            matched = items.len(),
            "filter completed"
        );
        Ok(TypedSequence { items })
    }

    /// Counts the elements matching `value` under `mode`.
    pub fn count_where(&self, value: impl Into<Value>, mode: MatchMode) -> Result<usize> {
        let predicate = self.predicate(value, mode)?;
        self.check(&predicate)?;
        Ok(self.items.iter().filter(|item| predicate.matches(item)).count())
    }

    /// Returns `true` if any element matches `value` under `mode`.
    pub fn any_where(&self, value: impl Into<Value>, mode: MatchMode) -> Result<bool> {
        let predicate = self.predicate(value, mode)?;
        self.check(&predicate)?;
        Ok(self.items.iter().any(|item| predicate.matches(item)))
    }

    fn predicate(&self, value: impl Into<Value>, mode: MatchMode) -> Result<Predicate> {
        Predicate::new(value, mode).inspect_err(|err| {
            debug!(mode = mode.as_str(), len = self.len(), error = %err, "filter rejected");
        })
    }

    fn check(&self, predicate: &Predicate) -> Result<()> {
        predicate.check(&self.items).inspect_err(|err| {
            debug!(
                mode = predicate.mode_name(),
                len = self.len(),
                error = %err,
                "filter rejected"
            );
        })
    }

    // ========================================================================
    // Filter shorthand methods
    // ========================================================================

    /// Keeps elements equal to `value`.
    pub fn filter_eq(&self, value: impl Into<Value>) -> Result<TypedSequence> {
        self.filter(value, MatchMode::Equal)
    }

    /// Keeps text elements containing `value`.
    pub fn filter_contains(&self, value: &str) -> Result<TypedSequence> {
        self.filter(value, MatchMode::Contains)
    }

    /// Keeps text elements starting with `value`.
    pub fn filter_starts_with(&self, value: &str) -> Result<TypedSequence> {
        self.filter(value, MatchMode::StartsWith)
    }

    /// Keeps text elements ending with `value`.
    pub fn filter_ends_with(&self, value: &str) -> Result<TypedSequence> {
        self.filter(value, MatchMode::EndsWith)
    }

    /// Keeps elements less than `value`.
    pub fn filter_gt(&self, value: impl Into<Value>) -> Result<TypedSequence> {
        self.filter(value, MatchMode::Greater)
    }

    /// Keeps elements less than or equal to `value`.
    pub fn filter_gte(&self, value: impl Into<Value>) -> Result<TypedSequence> {
        self.filter(value, MatchMode::GreaterOrEqual)
    }

    /// Keeps elements greater than `value`.
    pub fn filter_lt(&self, value: impl Into<Value>) -> Result<TypedSequence> {
        self.filter(value, MatchMode::Less)
    }

    /// Keeps elements greater than or equal to `value`.
    pub fn filter_lte(&self, value: impl Into<Value>) -> Result<TypedSequence> {
        self.filter(value, MatchMode::LessOrEqual)
    }
}

impl fmt::Display for TypedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_DELIMITER))
    }
}

impl FromStr for TypedSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        TypedSequence::from_csv(s)
    }
}

impl From<Vec<Value>> for TypedSequence {
    fn from(items: Vec<Value>) -> Self {
        TypedSequence { items }
    }
}

impl<V: Into<Value>> FromIterator<V> for TypedSequence {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        TypedSequence {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for TypedSequence {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl Index<usize> for TypedSequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl IntoIterator for TypedSequence {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypedSequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
