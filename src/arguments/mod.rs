//! Argument bags: an ordered positional sequence plus named values.
//!
//! [`Arguments`] is the value that flows through partial application. A
//! [`Partial`](crate::partial::Partial) captures one as its fixed set, every
//! call supplies another, and the two are merged before the target runs.
//!
//! # Merge Policy
//!
//! ```text
//! positional(merge(fixed, call)) = positional(fixed) ++ positional(call)
//! named(merge(fixed, call))      = named(fixed) overlaid by named(call)
//! ```
//!
//! Fixed positionals always occupy the leading slots. A call-time name that
//! is also fixed overrides the fixed value ([`Arguments::merge`]). Callers
//! who want such a collision to be an error use [`Arguments::try_merge`].
//!
//! # Examples
//!
//! ```rust
//! use lambind::{args, arguments::Arguments};
//!
//! let fixed: Arguments = args![1; na_rm = true];
//! let call: Arguments = args![2, 3; na_rm = false];
//!
//! let merged = Arguments::merge(&fixed, call);
//! assert_eq!(merged.to_string(), "(1, 2, 3, na_rm = false)");
//! ```

mod macros;
mod named;

use std::fmt;

use smallvec::SmallVec;
use tracing::debug;

pub use named::NamedArguments;

use crate::error::ArgumentError;
use crate::value::{FromValue, Value};

/// Positional storage. Most calls carry only a few positional values.
pub type Positional<V> = SmallVec<[V; 4]>;

/// A set of positional and named arguments.
///
/// `V` defaults to the dynamic [`Value`], but any element type works for
/// construction and merging. The typed accessors (`require`,
/// `require_named`, ...) are available on `Arguments<Value>`.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "V: serde::Serialize",
    deserialize = "V: serde::Deserialize<'de>"
)))]
pub struct Arguments<V = Value> {
    positional: Positional<V>,
    named: NamedArguments<V>,
}

impl<V> Arguments<V> {
    /// Creates an empty argument set.
    pub fn new() -> Self {
        Self {
            positional: SmallVec::new(),
            named: NamedArguments::new(),
        }
    }

    /// Creates an argument set holding only positional values.
    pub fn from_positional<I: IntoIterator<Item = V>>(values: I) -> Self {
        Self {
            positional: values.into_iter().collect(),
            named: NamedArguments::new(),
        }
    }

    /// Creates an argument set from its two halves.
    pub fn from_parts<I: IntoIterator<Item = V>>(positional: I, named: NamedArguments<V>) -> Self {
        Self {
            positional: positional.into_iter().collect(),
            named,
        }
    }

    /// Appends a positional value.
    pub fn push(&mut self, value: V) {
        self.positional.push(value);
    }

    /// Binds `value` to `name`, replacing and returning any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.named.insert(name, value)
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with_positional(mut self, value: impl Into<V>) -> Self {
        self.push(value.into());
        self
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// The positional values in order.
    pub fn positional(&self) -> &[V] {
        &self.positional
    }

    /// The named values.
    pub const fn named(&self) -> &NamedArguments<V> {
        &self.named
    }

    /// The positional value at `index`, if any.
    pub fn get_positional(&self, index: usize) -> Option<&V> {
        self.positional.get(index)
    }

    /// The value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.named.get(name)
    }

    /// Returns `true` when `name` is bound.
    pub fn contains_name(&self, name: &str) -> bool {
        self.named.contains(name)
    }

    /// Total number of arguments, positional and named.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Returns `true` when there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Splits the set into its positional and named halves.
    pub fn into_parts(self) -> (Positional<V>, NamedArguments<V>) {
        (self.positional, self.named)
    }
}

impl<V: Clone> Arguments<V> {
    /// Merges a fixed argument set with a call's arguments.
    ///
    /// Positional values of `fixed` come first, followed by those of `call`.
    /// Named values of `call` override those of `fixed` that share a name;
    /// the overriding entry keeps the slot of the fixed one.
    ///
    /// `fixed` is only read, so the same fixed set can be merged any number
    /// of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambind::{args, arguments::Arguments};
    ///
    /// let fixed: Arguments<i32> = args![1; x = 1];
    /// let merged = Arguments::merge(&fixed, args![2; x = 2]);
    ///
    /// assert_eq!(merged.positional(), &[1, 2]);
    /// assert_eq!(merged.get("x"), Some(&2));
    /// ```
    #[must_use]
    pub fn merge(fixed: &Self, call: Self) -> Self {
        let (call_positional, call_named) = call.into_parts();

        let mut positional = Positional::with_capacity(fixed.positional.len() + call_positional.len());
        positional.extend(fixed.positional.iter().cloned());
        positional.extend(call_positional);

        let mut named = fixed.named.clone();
        named.overlay(call_named);

        Self { positional, named }
    }

    /// Strict variant of [`merge`](Self::merge).
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::AlreadyFixed`] for the first call-time name
    /// that `fixed` already binds.
    pub fn try_merge(fixed: &Self, call: Self) -> Result<Self, ArgumentError> {
        if let Some(name) = call.named.names().find(|name| fixed.contains_name(name)) {
            debug!(name, "rejecting override of fixed argument");
            return Err(ArgumentError::AlreadyFixed {
                name: name.to_owned(),
            });
        }
        Ok(Self::merge(fixed, call))
    }
}

impl Arguments<Value> {
    /// Reads the positional argument at `index` as `T`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::MissingPositional`] when absent,
    /// [`ArgumentError::WrongType`] when the kind does not match.
    pub fn require<T: FromValue>(&self, index: usize) -> Result<T, ArgumentError> {
        let value = self
            .get_positional(index)
            .ok_or(ArgumentError::MissingPositional { index })?;
        T::from_value(value).map_err(|source| ArgumentError::wrong_positional_type(index, source))
    }

    /// Reads the named argument `name` as `T`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::MissingNamed`] when absent,
    /// [`ArgumentError::WrongType`] when the kind does not match.
    pub fn require_named<T: FromValue>(&self, name: &str) -> Result<T, ArgumentError> {
        let value = self.get(name).ok_or_else(|| ArgumentError::MissingNamed {
            name: name.to_owned(),
        })?;
        T::from_value(value).map_err(|source| ArgumentError::wrong_named_type(name, source))
    }

    /// Reads the named argument `name` as `T`, or returns `default` when absent.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::WrongType`] when present with the wrong kind.
    pub fn named_or<T: FromValue>(&self, name: &str, default: T) -> Result<T, ArgumentError> {
        self.get(name).map_or(Ok(default), |value| {
            T::from_value(value).map_err(|source| ArgumentError::wrong_named_type(name, source))
        })
    }

    /// Checks that exactly `expected` positional arguments are present.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::UnexpectedPositional`] on any other count.
    pub fn expect_positional_count(&self, expected: usize) -> Result<(), ArgumentError> {
        let found = self.positional.len();
        if found == expected {
            Ok(())
        } else {
            Err(ArgumentError::UnexpectedPositional { expected, found })
        }
    }

    /// Checks that every named argument appears in `accepted`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::UnknownName`] for the first name not in `accepted`.
    pub fn reject_unknown(&self, accepted: &[&str]) -> Result<(), ArgumentError> {
        match self.named.names().find(|name| !accepted.contains(name)) {
            Some(name) => Err(ArgumentError::UnknownName {
                name: name.to_owned(),
            }),
            None => Ok(()),
        }
    }
}

impl<V> Default for Arguments<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Arguments<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Arguments")
            .field("positional", &self.positional.as_slice())
            .field("named", &self.named)
            .finish()
    }
}

impl<V: fmt::Display> fmt::Display for Arguments<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        let mut first = true;
        for value in &self.positional {
            if !first {
                write!(formatter, ", ")?;
            }
            first = false;
            write!(formatter, "{value}")?;
        }
        for (name, value) in self.named.iter() {
            if !first {
                write!(formatter, ", ")?;
            }
            first = false;
            write!(formatter, "{name} = {value}")?;
        }
        write!(formatter, ")")
    }
}

impl<V> FromIterator<V> for Arguments<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iterator: I) -> Self {
        Self::from_positional(iterator)
    }
}

impl<V> Extend<V> for Arguments<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iterator: I) {
        self.positional.extend(iterator);
    }
}
