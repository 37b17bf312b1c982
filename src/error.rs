//! Error types for argument handling.
//!
//! Partial application itself never fails: on the permissive path the
//! fixed and call-time arguments are merged and the target's result is
//! returned untouched, including any error the target produces.
//!
//! The errors in this module come from two places only:
//!
//! - strict merging ([`Arguments::try_merge`](crate::arguments::Arguments::try_merge),
//!   [`Partial::call_strict`](crate::partial::Partial::call_strict)), which
//!   refuses to let a call override an already fixed name
//! - the typed accessors on [`Arguments`](crate::arguments::Arguments) that
//!   targets use to validate their inputs at call time

use thiserror::Error;

/// A [`Value`](crate::value::Value) did not have the kind a caller asked for.
///
/// # Examples
///
/// ```rust
/// use lambind::error::ValueTypeError;
///
/// let error = ValueTypeError {
///     expected: "float",
///     found: "string",
/// };
/// assert_eq!(error.to_string(), "expected float, found string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ValueTypeError {
    /// The kind that was requested.
    pub expected: &'static str,
    /// The kind that was actually present.
    pub found: &'static str,
}

/// Errors reported while assembling or reading an argument set.
///
/// # Examples
///
/// ```rust
/// use lambind::error::ArgumentError;
///
/// let error = ArgumentError::AlreadyFixed {
///     name: "na_rm".to_string(),
/// };
/// assert_eq!(error.to_string(), "argument `na_rm` is already fixed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A call supplied a named argument that the partial already fixes.
    #[error("argument `{name}` is already fixed")]
    AlreadyFixed {
        /// The colliding name.
        name: String,
    },

    /// No positional argument exists at the requested index.
    #[error("missing positional argument at index {index}")]
    MissingPositional {
        /// Zero-based index that was requested.
        index: usize,
    },

    /// No named argument exists with the requested name.
    #[error("missing named argument `{name}`")]
    MissingNamed {
        /// The requested name.
        name: String,
    },

    /// The number of positional arguments differs from what the target takes.
    #[error("expected {expected} positional arguments, found {found}")]
    UnexpectedPositional {
        /// Count the target accepts.
        expected: usize,
        /// Count that was supplied.
        found: usize,
    },

    /// A named argument the target does not recognize.
    #[error("unused argument `{name}`")]
    UnknownName {
        /// The unrecognized name.
        name: String,
    },

    /// An argument was present but had the wrong kind.
    #[error("argument {argument}: {source}")]
    WrongType {
        /// Either the positional index (`#0`) or the name of the argument.
        argument: String,
        /// The underlying mismatch.
        #[source]
        source: ValueTypeError,
    },
}

impl ArgumentError {
    pub(crate) fn wrong_positional_type(index: usize, source: ValueTypeError) -> Self {
        Self::WrongType {
            argument: format!("#{index}"),
            source,
        }
    }

    pub(crate) fn wrong_named_type(name: &str, source: ValueTypeError) -> Self {
        Self::WrongType {
            argument: format!("`{name}`"),
            source,
        }
    }
}
