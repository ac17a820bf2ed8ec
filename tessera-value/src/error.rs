// tessera-value - Error types for the Tessera runtime
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Tessera values and arrays.
//!
//! Every variant is a contract violation: a caller precondition that did not
//! hold. Bounds failures that are part of ordinary control flow (indexing,
//! searching, `peek`) are reported through `Option` instead and never reach
//! this type.

use std::fmt;

use crate::value::Tag;

/// Result type for Tessera operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations raised by values and arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value was extracted, called or compared at the wrong tag
    TypeMismatch {
        expected: Tag,
        got: Tag,
        context: Option<String>,
    },
    /// Unchecked index outside `0..length`
    IndexOutOfRange { index: i64, length: usize },
    /// Negative offset given to a region operation
    NegativeIndex { index: i64 },
    /// Negative count or a slice whose end precedes its start
    NegativeLength { length: i64 },
    /// Region handle used after it was frozen or discarded
    UseAfterFreeze { state: &'static str },
    /// Region storage borrowed mutably while already borrowed
    AliasingViolation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type mismatch: expected {}, got {}", expected, got)
                }
            }
            Error::IndexOutOfRange { index, length } => {
                write!(
                    f,
                    "Index {} out of range for array of length {}",
                    index, length
                )
            }
            Error::NegativeIndex { index } => {
                write!(f, "Negative index not supported: {}", index)
            }
            Error::NegativeLength { length } => {
                write!(f, "Negative length not supported: {}", length)
            }
            Error::UseAfterFreeze { state } => {
                write!(f, "Mutable array used after it was {}", state)
            }
            Error::AliasingViolation => {
                write!(f, "Mutable array is already borrowed by another operation")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a type mismatch error.
    pub fn type_error(expected: Tag, got: Tag) -> Self {
        Error::TypeMismatch {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type mismatch error with context.
    pub fn type_error_in(context: impl Into<String>, expected: Tag, got: Tag) -> Self {
        Error::TypeMismatch {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Attach context to a type mismatch that has none yet.
    ///
    /// Other variants pass through untouched.
    pub fn in_context(self, context: impl Into<String>) -> Self {
        match self {
            Error::TypeMismatch {
                expected,
                got,
                context: None,
            } => Error::type_error_in(context, expected, got),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_display() {
        let err = Error::type_error(Tag::Int, Tag::String);
        assert_eq!(err.to_string(), "Type mismatch: expected int, got string");

        let err = Error::type_error_in("range", Tag::Int, Tag::Float);
        assert_eq!(err.to_string(), "range: expected int, got float");
    }

    #[test]
    fn test_in_context_keeps_existing_context() {
        let err = Error::type_error_in("filter", Tag::Bool, Tag::Int).in_context("outer");
        assert_eq!(err.to_string(), "filter: expected bool, got int");

        let err = Error::type_error(Tag::Array, Tag::Unit).in_context("concat");
        assert_eq!(err.to_string(), "concat: expected array, got unit");

        assert_eq!(
            Error::AliasingViolation.in_context("ignored"),
            Error::AliasingViolation
        );
    }

    #[test]
    fn test_region_errors_display() {
        assert_eq!(
            Error::UseAfterFreeze { state: "frozen" }.to_string(),
            "Mutable array used after it was frozen"
        );
        assert_eq!(
            Error::NegativeIndex { index: -1 }.to_string(),
            "Negative index not supported: -1"
        );
        assert_eq!(
            Error::IndexOutOfRange {
                index: 3,
                length: 3
            }
            .to_string(),
            "Index 3 out of range for array of length 3"
        );
    }
}
