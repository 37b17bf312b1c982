//! # lambind
//!
//! Partial application for Rust: fix some of a function's arguments now and
//! supply the rest later.
//!
//! ## Overview
//!
//! - **Argument bags**: [`Arguments`](arguments::Arguments) holds an ordered
//!   positional sequence plus named values, and knows how to merge a fixed
//!   set with a call's arguments.
//! - **Dynamic partial application**: [`Partial`](partial::Partial) fixes
//!   arguments of any [`Callable`](partial::Callable) and forwards the merged
//!   set on every call. Validation is left to the target.
//! - **Typed partial application**: [`typed::partial`] fixes the leading
//!   parameters of an ordinary Rust function, checked at compile time.
//! - **Dynamic values**: [`Value`](value::Value) for loosely typed targets.
//!
//! ## Feature Flags
//!
//! - `arc`: share partial state through `Arc` instead of `Rc`, so partials
//!   can cross threads
//! - `serde`: serialization for `Value` and `Arguments`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambind::prelude::*;
//!
//! fn mean(arguments: Arguments) -> Result<Value, ArgumentError> {
//!     let values: Vec<Value> = arguments.require(0)?;
//!     let na_rm: bool = arguments.named_or("na_rm", false)?;
//!
//!     let mut total = 0.0;
//!     let mut count = 0.0;
//!     for value in &values {
//!         match value.as_f64() {
//!             Some(number) => {
//!                 total += number;
//!                 count += 1.0;
//!             }
//!             None if na_rm => {}
//!             None => return Ok(Value::Null),
//!         }
//!     }
//!     Ok(Value::Float(total / count))
//! }
//!
//! let mean_na_rm = partial!(mean; na_rm = true);
//!
//! let flags = vec![Some(true), Some(false), None, Some(true), Some(true)];
//! assert_eq!(mean_na_rm.call(args![flags.clone()]), Ok(Value::Float(0.75)));
//! assert_eq!(mean_na_rm.call(args![flags; na_rm = false]), Ok(Value::Null));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and macros.
///
/// # Usage
///
/// ```rust
/// use lambind::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arguments::{Arguments, NamedArguments};
    pub use crate::error::{ArgumentError, ValueTypeError};
    pub use crate::partial::{BoxedTarget, Callable, Partial, Shareable, Then, make_partial};
    pub use crate::typed::{SplitCall, TypedPartial};
    pub use crate::value::{FromValue, Value};
    pub use crate::{args, partial};
}

pub mod arguments;
pub mod error;
pub mod partial;
pub mod typed;
pub mod value;

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;
