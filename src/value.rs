//! Dynamic argument values.
//!
//! [`Value`] is the default element type of an
//! [`Arguments`](crate::arguments::Arguments) bag. It covers the shapes that
//! show up when forwarding arguments to loosely typed targets: missing
//! entries, booleans, integers, floats, strings, and lists of those.
//!
//! Targets read values back out with [`FromValue`], which reports a
//! [`ValueTypeError`] instead of panicking when the kind does not match.
//!
//! # Examples
//!
//! ```rust
//! use lambind::value::{FromValue, Value};
//!
//! let flags = Value::from(vec![Some(true), Some(false), None]);
//! assert_eq!(flags.to_string(), "[true, false, null]");
//!
//! let ratio = f64::from_value(&Value::from(0.75)).unwrap();
//! assert!((ratio - 0.75).abs() < f64::EPSILON);
//! ```

use std::fmt;

use crate::error::ValueTypeError;

/// A dynamically typed argument value.
///
/// `Null` stands for a missing entry, the way an `NA` marks a hole in a
/// data column.
///
/// With the `serde` feature values are untagged. JSON has no encoding for
/// non-finite floats, so `Float(NAN)` and the infinities serialize as `null`
/// and read back as `Null`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A missing value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns the name of this value's kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambind::value::Value;
    ///
    /// assert_eq!(Value::Null.kind(), "null");
    /// assert_eq!(Value::from(1.5).kind(), "float");
    /// ```
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the value.
    ///
    /// Booleans coerce to `1.0`/`0.0`. Every other non-numeric kind,
    /// including `Null`, yields `None`.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Self::Int(integer) => Some(*integer as f64),
            Self::Float(float) => Some(*float),
            Self::Null | Self::Str(_) | Self::List(_) => None,
        }
    }

    /// Borrows the elements of a list value.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(integer) => write!(formatter, "{integer}"),
            Self::Float(float) => write!(formatter, "{float}"),
            Self::Str(text) => write!(formatter, "{text:?}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(integer: i32) -> Self {
        Self::Int(i64::from(integer))
    }
}

impl From<i64> for Value {
    fn from(integer: i64) -> Self {
        Self::Int(integer)
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Self::Float(float)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().map(Into::into).collect())
    }
}

/// Typed extraction from a [`Value`].
///
/// Implemented for the Rust types a target most commonly wants to read its
/// arguments as. Integers widen to `f64`; nothing else is coerced.
pub trait FromValue: Sized {
    /// Reads `value` as `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueTypeError`] when `value` has an incompatible kind.
    fn from_value(value: &Value) -> Result<Self, ValueTypeError>;
}

const fn mismatch(expected: &'static str, value: &Value) -> ValueTypeError {
    ValueTypeError {
        expected,
        found: value.kind(),
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ValueTypeError> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Bool(flag) => Ok(*flag),
            other => Err(mismatch("bool", other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Int(integer) => Ok(*integer),
            other => Err(mismatch("int", other)),
        }
    }
}

impl FromValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Float(float) => Ok(*float),
            Value::Int(integer) => Ok(*integer as Self),
            other => Err(mismatch("float", other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Str(text) => Ok(text.clone()),
            other => Err(mismatch("string", other)),
        }
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::List(items) => Ok(items.clone()),
            other => Err(mismatch("list", other)),
        }
    }
}
