//! Partial application over argument bags.
//!
//! A [`Partial`] fixes some positional and named arguments of a target now
//! and accepts the rest later. Every call merges the fixed set with the
//! call's arguments (see [`Arguments::merge`]) and forwards the result to
//! the target.
//!
//! # Overview
//!
//! - [`Callable`]: anything that can be invoked with an [`Arguments`] bag.
//!   Every `Fn(Arguments<V>) -> R` is a `Callable`.
//! - [`Partial`] / [`make_partial`]: fix arguments of a `Callable`.
//! - [`partial!`](crate::partial!): macro form of [`make_partial`].
//! - [`Then`]: post-composition of a `Callable` with an ordinary function.
//! - [`BoxedTarget`]: type-erased target for storing unlike partials together.
//!
//! # Semantics
//!
//! ```text
//! make_partial(f, fixed).call(call) == f(merge(fixed, call))
//! ```
//!
//! - Construction never invokes the target.
//! - The fixed set never changes; calls do not leak into each other.
//! - The target's output is returned unchanged. A target returning
//!   `Result` has its errors forwarded as they are.
//! - Nothing is validated against the target's parameters; the target
//!   validates its own arguments when it runs.
//!
//! # Examples
//!
//! ```rust
//! use lambind::{args, partial, arguments::Arguments, error::ArgumentError};
//!
//! fn scale(arguments: Arguments) -> Result<f64, ArgumentError> {
//!     let value: f64 = arguments.require(0)?;
//!     let factor: f64 = arguments.named_or("factor", 1.0)?;
//!     Ok(value * factor)
//! }
//!
//! let double = partial!(scale; factor = 2.0);
//!
//! assert_eq!(double.call(args![4.0]), Ok(8.0));
//! // Call-time names override fixed ones.
//! assert_eq!(double.call(args![4.0; factor = 3.0]), Ok(12.0));
//! // Target failures pass straight through.
//! assert_eq!(
//!     double.call(args![]),
//!     Err(ArgumentError::MissingPositional { index: 0 })
//! );
//! ```

mod partial_macro;

use std::fmt;

use tracing::trace;

use crate::ReferenceCounter;
use crate::arguments::Arguments;
use crate::error::ArgumentError;
use crate::value::Value;

/// A function value invoked with a whole argument bag.
///
/// This is the seam partial application works through: the target receives
/// the merged [`Arguments`] and decides for itself what they mean.
pub trait Callable<V = Value> {
    /// What an invocation produces.
    type Output;

    /// Invokes the callable with `arguments`.
    fn invoke(&self, arguments: Arguments<V>) -> Self::Output;

    /// Feeds every output of `self` into `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambind::{args, arguments::Arguments, partial::Callable};
    ///
    /// let count = |arguments: Arguments<i32>| arguments.len();
    /// let described = count.then(|total: usize| format!("{total} arguments"));
    ///
    /// assert_eq!(described.invoke(args![1, 2; x = 3]), "3 arguments");
    /// ```
    fn then<G, U>(self, next: G) -> Then<Self, G>
    where
        Self: Sized,
        G: Fn(Self::Output) -> U,
    {
        Then { first: self, next }
    }
}

impl<F, V, R> Callable<V> for F
where
    F: Fn(Arguments<V>) -> R,
{
    type Output = R;

    fn invoke(&self, arguments: Arguments<V>) -> R {
        self(arguments)
    }
}

/// Thread-safety a target needs before it can be boxed.
///
/// `Send + Sync` with the `arc` feature, no requirement otherwise.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync> Shareable for T {}

/// Thread-safety a target needs before it can be boxed.
///
/// `Send + Sync` with the `arc` feature, no requirement otherwise.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T> Shareable for T {}

/// A type-erased target.
///
/// With the `arc` feature the closure must be `Send + Sync`, so partials
/// built on it can be shared between threads.
#[cfg(feature = "arc")]
pub type BoxedTarget<V, R> = Box<dyn Fn(Arguments<V>) -> R + Send + Sync>;

/// A type-erased target.
///
/// With the `arc` feature the closure must be `Send + Sync`, so partials
/// built on it can be shared between threads.
#[cfg(not(feature = "arc"))]
pub type BoxedTarget<V, R> = Box<dyn Fn(Arguments<V>) -> R>;

/// A callable with some of its arguments fixed.
///
/// Both the target and the fixed set sit behind a shared reference counter
/// (`Rc`, or `Arc` with the `arc` feature). Cloning a `Partial` shares them;
/// the target is never copied.
pub struct Partial<C, V = Value> {
    target: ReferenceCounter<C>,
    fixed: ReferenceCounter<Arguments<V>>,
}

/// Fixes `fixed` as the leading arguments of every future call to `target`.
///
/// `target` is not invoked.
///
/// # Examples
///
/// ```rust
/// use lambind::{args, arguments::Arguments, partial::make_partial};
///
/// let join = |arguments: Arguments<String>| {
///     let separator = arguments.get("sep").cloned().unwrap_or_default();
///     arguments.positional().join(separator.as_str())
/// };
///
/// let path = make_partial(join, args!["usr".to_string(); sep = "/".to_string()]);
/// assert_eq!(path.call(args!["local".to_string(), "bin".to_string()]), "usr/local/bin");
/// ```
pub fn make_partial<C, V>(target: C, fixed: Arguments<V>) -> Partial<C, V>
where
    C: Callable<V>,
    V: Clone,
{
    Partial::new(target, fixed)
}

impl<C, V> Partial<C, V> {
    /// Creates a partial application. See [`make_partial`].
    pub fn new(target: C, fixed: Arguments<V>) -> Self {
        trace!(
            fixed_positional = fixed.positional().len(),
            fixed_named = ?fixed.named().names().collect::<Vec<_>>(),
            "partial constructed"
        );
        Self {
            target: ReferenceCounter::new(target),
            fixed: ReferenceCounter::new(fixed),
        }
    }

    /// The fixed argument set.
    pub fn fixed(&self) -> &Arguments<V> {
        &self.fixed
    }

    /// The wrapped target.
    pub fn target(&self) -> &C {
        &self.target
    }
}

impl<C, V> Partial<C, V>
where
    C: Callable<V>,
    V: Clone,
{
    /// Merges `call` into the fixed set and invokes the target.
    ///
    /// A call-time name that is already fixed overrides the fixed value.
    pub fn call(&self, call: Arguments<V>) -> C::Output {
        trace!(
            call_positional = call.positional().len(),
            call_named = ?call.named().names().collect::<Vec<_>>(),
            "invoking partial target"
        );
        self.target.invoke(Arguments::merge(&self.fixed, call))
    }

    /// Like [`call`](Self::call), but refuses to override a fixed name.
    ///
    /// The target's own output, including any error it reports, is returned
    /// inside `Ok`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::AlreadyFixed`] when `call` names an argument that is
    /// already fixed. The target is not invoked in that case.
    pub fn call_strict(&self, call: Arguments<V>) -> Result<C::Output, ArgumentError> {
        let merged = Arguments::try_merge(&self.fixed, call)?;
        Ok(self.target.invoke(merged))
    }

    /// Fixes further arguments, returning a new partial over the same target.
    ///
    /// `more` is merged after the current fixed set, with the usual override
    /// rule for names. `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambind::{args, arguments::Arguments, partial::make_partial};
    ///
    /// let sum = |arguments: Arguments<i32>| arguments.positional().iter().sum::<i32>();
    /// let plus_one = make_partial(sum, args![1]);
    /// let plus_three = plus_one.bind(args![2]);
    ///
    /// assert_eq!(plus_one.call(args![10]), 11);
    /// assert_eq!(plus_three.call(args![10]), 13);
    /// ```
    #[must_use]
    pub fn bind(&self, more: Arguments<V>) -> Self {
        let fixed = Arguments::merge(&self.fixed, more);
        trace!(
            fixed_positional = fixed.positional().len(),
            fixed_named = ?fixed.named().names().collect::<Vec<_>>(),
            "partial rebound"
        );
        Self {
            target: ReferenceCounter::clone(&self.target),
            fixed: ReferenceCounter::new(fixed),
        }
    }

    /// Applies the partial to each argument set in `calls`, lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambind::{args, arguments::Arguments, partial::make_partial};
    ///
    /// let product = |arguments: Arguments<i32>| arguments.positional().iter().product::<i32>();
    /// let triple = make_partial(product, args![3]);
    ///
    /// let results: Vec<i32> = triple.call_each((1..=3).map(|n| args![n])).collect();
    /// assert_eq!(results, vec![3, 6, 9]);
    /// ```
    pub fn call_each<I>(&self, calls: I) -> impl Iterator<Item = C::Output>
    where
        I: IntoIterator<Item = Arguments<V>>,
    {
        calls.into_iter().map(move |call| self.call(call))
    }
}

impl<C, V> Partial<C, V>
where
    C: Callable<V> + Shareable + 'static,
    V: Clone + 'static,
{
    /// Erases the target type.
    ///
    /// The fixed set is kept as is; the target is shared, not copied.
    pub fn boxed(self) -> Partial<BoxedTarget<V, C::Output>, V> {
        let target = self.target;
        let erased: BoxedTarget<V, C::Output> =
            Box::new(move |arguments: Arguments<V>| target.invoke(arguments));
        Partial {
            target: ReferenceCounter::new(erased),
            fixed: self.fixed,
        }
    }
}

impl<C, V> Callable<V> for Partial<C, V>
where
    C: Callable<V>,
    V: Clone,
{
    type Output = C::Output;

    fn invoke(&self, arguments: Arguments<V>) -> Self::Output {
        self.call(arguments)
    }
}

impl<C, V> Clone for Partial<C, V> {
    fn clone(&self) -> Self {
        Self {
            target: ReferenceCounter::clone(&self.target),
            fixed: ReferenceCounter::clone(&self.fixed),
        }
    }
}

impl<C, V: fmt::Debug> fmt::Debug for Partial<C, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("fixed", &*self.fixed)
            .finish_non_exhaustive()
    }
}

impl<C, V: fmt::Display> fmt::Display for Partial<C, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Partial{}", self.fixed)
    }
}

/// A [`Callable`] whose output is passed through a second function.
///
/// Created by [`Callable::then`].
#[derive(Clone)]
pub struct Then<C, G> {
    first: C,
    next: G,
}

impl<C, G, V, U> Callable<V> for Then<C, G>
where
    C: Callable<V>,
    G: Fn(C::Output) -> U,
{
    type Output = U;

    fn invoke(&self, arguments: Arguments<V>) -> U {
        (self.next)(self.first.invoke(arguments))
    }
}
