//! Statically typed partial application.
//!
//! When the target is an ordinary Rust function, its parameter types are
//! known at compile time and the dynamic [`Arguments`](crate::arguments::Arguments)
//! bag is unnecessary. [`partial`] fixes the leading parameters as a tuple
//! and [`TypedPartial::call`] supplies the trailing ones as another tuple.
//! A split that does not fit the target's signature is a compile error.
//!
//! There are no named parameters here; that is what the dynamic
//! [`Partial`](crate::partial::Partial) is for.
//!
//! # Examples
//!
//! ```rust
//! use lambind::typed;
//!
//! fn clamp(low: i32, high: i32, value: i32) -> i32 {
//!     value.max(low).min(high)
//! }
//!
//! let percent = typed::partial(clamp, (0, 100));
//! assert_eq!(percent.call((150,)), 100);
//! assert_eq!(percent.call((-3,)), 0);
//!
//! let at_least_ten = typed::partial(clamp, (10,));
//! assert_eq!(at_least_ten.call((20, 5)), 10);
//! ```

use std::fmt;

use crate::ReferenceCounter;

/// Invokes a function with a fixed leading tuple and a trailing tuple.
///
/// Implemented for every `Fn` of arity 1 through 6 and every way of
/// splitting its parameters into a leading `Fixed` part and a trailing
/// `Rest` part. Fixed values are cloned on each call.
pub trait SplitCall<Fixed, Rest> {
    /// The function's return type.
    type Output;

    /// Calls `self` with the elements of `fixed` followed by those of `rest`.
    fn split_call(&self, fixed: &Fixed, rest: Rest) -> Self::Output;
}

macro_rules! impl_split_call {
    ([$($fixed:ident $fixed_value:ident),*], [$($rest:ident $rest_value:ident),*]) => {
        impl<Function, R, $($fixed,)* $($rest,)*> SplitCall<($($fixed,)*), ($($rest,)*)> for Function
        where
            Function: Fn($($fixed,)* $($rest,)*) -> R,
            $($fixed: Clone,)*
        {
            type Output = R;

            fn split_call(&self, fixed: &($($fixed,)*), rest: ($($rest,)*)) -> R {
                let ($($fixed_value,)*) = fixed;
                let ($($rest_value,)*) = rest;
                self($($fixed_value.clone(),)* $($rest_value,)*)
            }
        }
    };
}

impl_split_call!([], [A a]);
impl_split_call!([A a], []);

impl_split_call!([], [A a, B b]);
impl_split_call!([A a], [B b]);
impl_split_call!([A a, B b], []);

impl_split_call!([], [A a, B b, C c]);
impl_split_call!([A a], [B b, C c]);
impl_split_call!([A a, B b], [C c]);
impl_split_call!([A a, B b, C c], []);

impl_split_call!([], [A a, B b, C c, D d]);
impl_split_call!([A a], [B b, C c, D d]);
impl_split_call!([A a, B b], [C c, D d]);
impl_split_call!([A a, B b, C c], [D d]);
impl_split_call!([A a, B b, C c, D d], []);

impl_split_call!([], [A a, B b, C c, D d, E e]);
impl_split_call!([A a], [B b, C c, D d, E e]);
impl_split_call!([A a, B b], [C c, D d, E e]);
impl_split_call!([A a, B b, C c], [D d, E e]);
impl_split_call!([A a, B b, C c, D d], [E e]);
impl_split_call!([A a, B b, C c, D d, E e], []);

impl_split_call!([], [A a, B b, C c, D d, E e, G g]);
impl_split_call!([A a], [B b, C c, D d, E e, G g]);
impl_split_call!([A a, B b], [C c, D d, E e, G g]);
impl_split_call!([A a, B b, C c], [D d, E e, G g]);
impl_split_call!([A a, B b, C c, D d], [E e, G g]);
impl_split_call!([A a, B b, C c, D d, E e], [G g]);
impl_split_call!([A a, B b, C c, D d, E e, G g], []);

/// A function with its leading parameters fixed.
///
/// Created by [`partial`]. Cloning shares the function and the fixed tuple.
pub struct TypedPartial<F, Fixed> {
    function: ReferenceCounter<F>,
    fixed: ReferenceCounter<Fixed>,
}

/// Fixes the leading parameters of `function` to the elements of `fixed`.
///
/// `function` is not invoked.
pub fn partial<F, Fixed>(function: F, fixed: Fixed) -> TypedPartial<F, Fixed> {
    TypedPartial {
        function: ReferenceCounter::new(function),
        fixed: ReferenceCounter::new(fixed),
    }
}

impl<F, Fixed> TypedPartial<F, Fixed> {
    /// Invokes the function with the fixed values followed by `rest`.
    pub fn call<Rest>(&self, rest: Rest) -> <F as SplitCall<Fixed, Rest>>::Output
    where
        F: SplitCall<Fixed, Rest>,
    {
        self.function.split_call(&self.fixed, rest)
    }

    /// The fixed leading values.
    pub fn fixed(&self) -> &Fixed {
        &self.fixed
    }
}

impl<F, Fixed> Clone for TypedPartial<F, Fixed> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            fixed: ReferenceCounter::clone(&self.fixed),
        }
    }
}

impl<F, Fixed: fmt::Debug> fmt::Debug for TypedPartial<F, Fixed> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TypedPartial")
            .field("fixed", &*self.fixed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[test]
    fn test_fix_first_of_two() {
        let from_ten = partial(subtract, (10,));
        assert_eq!(from_ten.call((3,)), 7);
    }

    #[test]
    fn test_all_fixed_is_a_thunk() {
        let thunk = partial(subtract, (10, 4));
        assert_eq!(thunk.call(()), 6);
    }

    #[test]
    fn test_nothing_fixed() {
        let same = partial(subtract, ());
        assert_eq!(same.call((1, 2)), -1);
    }

    #[test]
    fn test_fixed_non_copy_value_is_cloned_per_call() {
        let greet = |greeting: String, name: &str| format!("{greeting}, {name}");
        let hello = partial(greet, ("Hello".to_string(),));

        assert_eq!(hello.call(("Alice",)), "Hello, Alice");
        assert_eq!(hello.call(("Bob",)), "Hello, Bob");
    }
}
