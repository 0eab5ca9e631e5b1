//! Error types for the typed-seq crate.

use thiserror::Error;

use crate::mode::MatchMode;
use crate::value::ValueKind;

/// The two failure families a sequence operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied a malformed or type-inappropriate input.
    InvalidArgument,
    /// The sequence's current contents are incompatible with the operation.
    InvalidOperation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::InvalidOperation => write!(f, "invalid operation"),
        }
    }
}

/// Errors that can occur when building or filtering a sequence.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// Delimited text to parse was empty.
    #[error("delimited text must not be empty")]
    EmptyText,

    /// Delimited text to parse was absent.
    #[error("delimited text must be provided")]
    MissingText,

    /// The delimiter used for parsing was empty.
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    /// A text-matching mode was given a non-text value.
    #[error("mode '{mode}' requires a text value, got {actual}")]
    TextValueRequired { mode: &'static str, actual: ValueKind },

    /// An ordering mode was given a value without an ordering.
    #[error("mode '{mode}' requires an orderable value, {kind} values cannot be ordered")]
    NotComparable { mode: MatchMode, kind: ValueKind },

    /// An ordering mode was given a value of a different runtime type than the elements.
    #[error("mode '{mode}' cannot compare a {actual} value against {expected} elements")]
    TypeMismatch {
        mode: MatchMode,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Match mode name or ordinal outside the known set.
    #[error("unknown match mode '{0}'")]
    UnknownMode(String),

    /// A text-matching mode found a non-text element in the sequence.
    #[error("mode '{mode}' requires every element to be text, element {index} is {kind}")]
    NonTextElement {
        mode: &'static str,
        index: usize,
        kind: ValueKind,
    },

    /// An ordering mode was applied to a sequence holding more than one type.
    #[error("mode '{mode}' requires all elements to share one type")]
    NotHomogeneous { mode: MatchMode },
}

impl SequenceError {
    /// Returns the failure family of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SequenceError::EmptyText
            | SequenceError::MissingText
            | SequenceError::EmptyDelimiter
            | SequenceError::TextValueRequired { .. }
            | SequenceError::NotComparable { .. }
            | SequenceError::TypeMismatch { .. }
            | SequenceError::InvalidRegex(_)
            | SequenceError::UnknownMode(_) => ErrorKind::InvalidArgument,
            SequenceError::NonTextElement { .. } | SequenceError::NotHomogeneous { .. } => {
                ErrorKind::InvalidOperation
            }
        }
    }

    /// Returns `true` if the caller's input was at fault.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Returns `true` if the sequence's contents were at fault.
    pub fn is_invalid_operation(&self) -> bool {
        self.kind() == ErrorKind::InvalidOperation
    }
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
