//! The `partial!` macro for fixing arguments inline.
//!
//! This module provides the [`partial!`] macro, which combines
//! [`args!`](crate::args!) and [`make_partial`](crate::partial::make_partial).

/// Partially applies positional and named arguments to a callable.
///
/// The callable receives the merged [`Arguments`](crate::arguments::Arguments)
/// when the resulting [`Partial`](crate::partial::Partial) is called.
///
/// # Syntax
///
/// - `partial!(f)`: nothing fixed
/// - `partial!(f, a, b)`: leading positional values fixed
/// - `partial!(f, a, b; name = v)`: positional and named values fixed
/// - `partial!(f; name = v)`: named values only
///
/// Values are converted with [`Into`], as in [`args!`](crate::args!).
///
/// # Examples
///
/// ```rust
/// use lambind::{args, partial, arguments::Arguments};
///
/// fn describe(arguments: Arguments) -> String {
///     arguments.to_string()
/// }
///
/// let with_label = partial!(describe, "label"; sep = ",");
/// assert_eq!(with_label.call(args![1, 2]), r#"("label", 1, 2, sep = ",")"#);
/// assert_eq!(with_label.call(args![; sep = ";"]), r#"("label", sep = ";")"#);
/// ```
#[macro_export]
macro_rules! partial {
    ($target:expr $(,)?) => {
        $crate::partial::make_partial($target, $crate::arguments::Arguments::new())
    };

    ($target:expr, $($value:expr),+ $(,)?) => {
        $crate::partial::make_partial($target, $crate::args![$($value),+])
    };

    ($target:expr, $($value:expr),+ ; $($name:ident = $named:expr),* $(,)?) => {
        $crate::partial::make_partial($target, $crate::args![$($value),+ ; $($name = $named),*])
    };

    ($target:expr ; $($name:ident = $named:expr),* $(,)?) => {
        $crate::partial::make_partial($target, $crate::args![; $($name = $named),*])
    };
}
