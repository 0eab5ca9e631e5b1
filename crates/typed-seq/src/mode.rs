//! Match modes for sequence filtering.
//!
//! The [`MatchMode`] enum is the closed set of predicate families a filter can
//! use: equality, the text family, and the ordering family.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::SequenceError;

/// Predicate family used by [`TypedSequence::filter`](crate::TypedSequence::filter).
///
/// Modes are grouped by what they require:
/// - **Equality**: `Equal` works on every type
/// - **Text**: `Contains`, `StartsWith`, `EndsWith` need a text value and text elements
/// - **Ordering**: `Greater`, `GreaterOrEqual`, `Less`, `LessOrEqual` need an
///   orderable value and a homogeneous sequence
///
/// Ordering modes compare the filter value against each element, with the
/// filter value on the left: `Greater` keeps elements the value is greater
/// than.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Element equals the value.
    #[default]
    Equal,
    /// Element text contains the value.
    Contains,
    /// Element text starts with the value.
    StartsWith,
    /// Element text ends with the value.
    EndsWith,
    /// Value is greater than the element.
    Greater,
    /// Value is greater than or equal to the element.
    GreaterOrEqual,
    /// Value is less than the element.
    Less,
    /// Value is less than or equal to the element.
    LessOrEqual,
}

impl MatchMode {
    /// Every mode, in declaration order.
    pub const ALL: [MatchMode; 8] = [
        MatchMode::Equal,
        MatchMode::Contains,
        MatchMode::StartsWith,
        MatchMode::EndsWith,
        MatchMode::Greater,
        MatchMode::GreaterOrEqual,
        MatchMode::Less,
        MatchMode::LessOrEqual,
    ];

    /// Returns `true` if this mode matches on text.
    pub fn is_text_mode(self) -> bool {
        matches!(
            self,
            MatchMode::Contains | MatchMode::StartsWith | MatchMode::EndsWith
        )
    }

    /// Returns `true` if this mode compares by ordering.
    pub fn is_ordering_mode(self) -> bool {
        matches!(
            self,
            MatchMode::Greater | MatchMode::GreaterOrEqual | MatchMode::Less | MatchMode::LessOrEqual
        )
    }

    /// Evaluates an ordering mode given `value.cmp(element)`.
    ///
    /// Returns `false` for modes that are not ordering-based.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            MatchMode::Greater => ordering == Ordering::Greater,
            MatchMode::GreaterOrEqual => ordering != Ordering::Less,
            MatchMode::Less => ordering == Ordering::Less,
            MatchMode::LessOrEqual => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Evaluates a text mode against an element.
    ///
    /// Returns `false` for modes that are not text-based.
    pub fn eval_text(self, element: &str, needle: &str) -> bool {
        match self {
            MatchMode::Contains => element.contains(needle),
            MatchMode::StartsWith => element.starts_with(needle),
            MatchMode::EndsWith => element.ends_with(needle),
            _ => false,
        }
    }

    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Equal => "equal",
            MatchMode::Contains => "contains",
            MatchMode::StartsWith => "startswith",
            MatchMode::EndsWith => "endswith",
            MatchMode::Greater => "greater",
            MatchMode::GreaterOrEqual => "greaterorequal",
            MatchMode::Less => "less",
            MatchMode::LessOrEqual => "lessorequal",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = SequenceError;

    /// Parses a mode name, ignoring ASCII case.
    ///
    /// Accepts the display names plus the aliases `eq`, `gt`, `gte`, `lt`,
    /// `lte`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.to_ascii_lowercase().as_str() {
            "equal" | "eq" => MatchMode::Equal,
            "contains" => MatchMode::Contains,
            "startswith" => MatchMode::StartsWith,
            "endswith" => MatchMode::EndsWith,
            "greater" | "gt" => MatchMode::Greater,
            "greaterorequal" | "gte" => MatchMode::GreaterOrEqual,
            "less" | "lt" => MatchMode::Less,
            "lessorequal" | "lte" => MatchMode::LessOrEqual,
            _ => return Err(SequenceError::UnknownMode(s.to_string())),
        };
        Ok(mode)
    }
}

impl TryFrom<i32> for MatchMode {
    type Error = SequenceError;

    /// Converts a mode ordinal (declaration order, starting at 0).
    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| MatchMode::ALL.get(i).copied())
            .ok_or_else(|| SequenceError::UnknownMode(ordinal.to_string()))
    }
}
