//! Runtime value types held by a sequence.
//!
//! The [`Value`] enum is the closed set of element types a
//! [`TypedSequence`](crate::TypedSequence) can hold: integers, floats, text,
//! booleans, timestamps, and opaque values that only know their type name and
//! their text form.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// Owned runtime value stored in a sequence.
///
/// Equality never crosses variants: `Integer(1)` and `Float(1.0)` are
/// different values of different types. Two NaN floats compare equal.
///
/// # Example
///
/// ```
/// use typed_seq::{Value, ValueKind};
///
/// let v = Value::from(42);
/// assert_eq!(v.kind(), ValueKind::Integer);
/// assert_eq!(v.to_string(), "42");
/// assert_ne!(Value::from(1), Value::from(1.0));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text value.
    Text(String),
    /// Boolean value.
    Boolean(bool),
    /// Point in time.
    Timestamp(Timestamp),
    /// Value of a type outside the closed set. It has no ordering.
    Other(Opaque),
}

impl Value {
    /// Returns the variant tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Other(_) => ValueKind::Other,
        }
    }

    /// Returns `true` if both values have the identical runtime type.
    ///
    /// Opaque values only share a type when their type names are equal.
    pub fn same_type(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Other(a), Value::Other(b)) => a.type_name == b.type_name,
            _ => self.kind() == other.kind(),
        }
    }

    /// Returns `true` if values of this type can be ordered.
    pub fn is_orderable(&self) -> bool {
        !matches!(self, Value::Other(_))
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Extracts the text, if present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the integer, if present.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the float, if present.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the timestamp, if present.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Timestamp(t) => write!(f, "{t}"),
            Value::Other(o) => f.write_str(&o.text),
        }
    }
}

/// Variant tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
    Boolean,
    Timestamp,
    Other,
}

impl ValueKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Boolean => "boolean",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Other => "other",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of a type the closed set does not model.
///
/// Carries the name of its type, which decides type identity, and the
/// text it renders as when joined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opaque {
    pub type_name: String,
    pub text: String,
}

impl Opaque {
    pub fn new(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Opaque {
            type_name: type_name.into(),
            text: text.into(),
        }
    }
}

/// Timestamp value represented as milliseconds since Unix epoch, UTC.
///
/// Renders as RFC 3339 with millisecond precision. Timestamps outside the
/// calendar range chrono can represent render as their raw millisecond count.
///
/// # Example
///
/// ```
/// use typed_seq::Timestamp;
///
/// assert!(Timestamp(1000) < Timestamp(2000));
/// assert_eq!(Timestamp(0).to_string(), "1970-01-01T00:00:00.000Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the timestamp as seconds since Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0.div_euclid(1000)
    }

    /// Converts to a chrono datetime, if within its range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_millis())
    }
}

// Conversions from primitive types

impl From<i8> for Value {
    fn from(n: i8) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Timestamp> for Value {
    fn from(t: Timestamp) -> Self {
        Value::Timestamp(t)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Timestamp(dt.into())
    }
}

impl From<Opaque> for Value {
    fn from(o: Opaque) -> Self {
        Value::Other(o)
    }
}
