//! The `args!` macro for building argument sets inline.

/// Builds an [`Arguments`](crate::arguments::Arguments) value.
///
/// Positional values come first, separated by commas. Named values follow a
/// semicolon as `name = value`. Every value is converted with [`Into`], so
/// literals convert straight into [`Value`](crate::value::Value).
///
/// # Syntax
///
/// - `args![]`: empty
/// - `args![a, b]`: positional only
/// - `args![a, b; name = v]`: positional and named
/// - `args![; name = v]`: named only
///
/// # Examples
///
/// ```rust
/// use lambind::{args, arguments::Arguments, value::Value};
///
/// let arguments: Arguments = args![vec![1.0, 2.0], 0.1; na_rm = true];
///
/// assert_eq!(arguments.positional().len(), 2);
/// assert_eq!(arguments.get("na_rm"), Some(&Value::Bool(true)));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::arguments::Arguments::new()
    };

    ($($value:expr),+ $(,)?) => {{
        let mut arguments = $crate::arguments::Arguments::new();
        $(
            arguments.push(::core::convert::Into::into($value));
        )+
        arguments
    }};

    ($($value:expr),* ; $($name:ident = $named:expr),* $(,)?) => {{
        let mut arguments = $crate::arguments::Arguments::new();
        $(
            arguments.push(::core::convert::Into::into($value));
        )*
        $(
            arguments.insert(::core::stringify!($name), ::core::convert::Into::into($named));
        )*
        arguments
    }};
}
