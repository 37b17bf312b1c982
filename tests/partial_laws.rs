//! Property-based tests for partial application laws.
//!
//! ## Laws
//! - **Identity of effect**: `make_partial(f, a).call(b) == f(merge(a, b))`
//! - **Statelessness**: an earlier call never changes a later one
//! - **No eager invocation**: construction does not call `f`
//! - **Leading fixed positionals**: merged positionals are `a ++ b`
//! - **Override**: a name present in both `a` and `b` takes `b`'s value
//! - **Error transparency**: `f` fails through the partial exactly when it
//!   fails when called directly with the merged arguments

use lambind::arguments::{Arguments, NamedArguments};
use lambind::partial::make_partial;
use proptest::prelude::*;
use std::cell::Cell;

// =============================================================================
// Strategies
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["x", "y", "z", "na_rm", "trim"]).prop_map(str::to_owned)
}

fn arguments_strategy() -> impl Strategy<Value = Arguments<i64>> {
    (
        prop::collection::vec(-1_000_i64..1_000, 0..5),
        prop::collection::vec((name_strategy(), -1_000_i64..1_000), 0..5),
    )
        .prop_map(|(positional, named)| {
            Arguments::from_parts(positional, named.into_iter().collect::<NamedArguments<i64>>())
        })
}

fn echo(arguments: Arguments<i64>) -> Arguments<i64> {
    arguments
}

fn weighted_sum(arguments: Arguments<i64>) -> i64 {
    let positional: i64 = arguments
        .positional()
        .iter()
        .enumerate()
        .map(|(index, value)| (index as i64 + 1).wrapping_mul(*value))
        .fold(0, i64::wrapping_add);
    let named: i64 = arguments
        .named()
        .iter()
        .map(|(name, value)| (name.len() as i64).wrapping_mul(*value))
        .fold(0, i64::wrapping_add);
    positional.wrapping_add(named)
}

fn checked_divide(arguments: Arguments<i64>) -> Result<i64, String> {
    let numerator = arguments.get_positional(0).copied().unwrap_or(0);
    let denominator = arguments.get("x").copied().unwrap_or(1);
    numerator
        .checked_div(denominator)
        .ok_or_else(|| format!("cannot divide {numerator} by {denominator}"))
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    /// Identity of effect: make_partial(f, a).call(b) == f(merge(a, b))
    #[test]
    fn prop_identity_of_effect(fixed in arguments_strategy(), call in arguments_strategy()) {
        let expected = weighted_sum(Arguments::merge(&fixed, call.clone()));
        let bound = make_partial(weighted_sum, fixed);

        prop_assert_eq!(bound.call(call), expected);
    }

    /// Statelessness: a first call does not affect a second one.
    #[test]
    fn prop_calls_are_independent(
        fixed in arguments_strategy(),
        first in arguments_strategy(),
        second in arguments_strategy(),
    ) {
        let bound = make_partial(echo, fixed.clone());
        let fresh = make_partial(echo, fixed);

        let _ = bound.call(first);

        prop_assert_eq!(bound.call(second.clone()), fresh.call(second));
    }

    /// Re-usability: the same partial gives the same answer for the same call.
    #[test]
    fn prop_repeated_calls_agree(fixed in arguments_strategy(), call in arguments_strategy()) {
        let bound = make_partial(weighted_sum, fixed);
        let first = bound.call(call.clone());

        for _ in 0..5 {
            prop_assert_eq!(bound.call(call.clone()), first);
        }
    }

    /// No eager invocation: only calls reach the target.
    #[test]
    fn prop_construction_is_lazy(fixed in arguments_strategy(), calls in 0_usize..8) {
        let invocations = Cell::new(0_usize);
        let target = |arguments: Arguments<i64>| {
            invocations.set(invocations.get() + 1);
            arguments.len()
        };

        let bound = make_partial(target, fixed);
        prop_assert_eq!(invocations.get(), 0);

        for _ in 0..calls {
            let _ = bound.call(Arguments::new());
        }
        prop_assert_eq!(invocations.get(), calls);
    }

    /// Fixed positionals occupy the leading slots.
    #[test]
    fn prop_fixed_positionals_lead(fixed in arguments_strategy(), call in arguments_strategy()) {
        let merged = make_partial(echo, fixed.clone()).call(call.clone());

        let expected: Vec<i64> = fixed
            .positional()
            .iter()
            .chain(call.positional())
            .copied()
            .collect();
        prop_assert_eq!(merged.positional(), expected.as_slice());
    }

    /// Override: call-time names win, fixed-only names survive.
    #[test]
    fn prop_call_time_names_override(fixed in arguments_strategy(), call in arguments_strategy()) {
        let merged = make_partial(echo, fixed.clone()).call(call.clone());

        for (name, value) in call.named().iter() {
            prop_assert_eq!(merged.get(name), Some(value));
        }
        for (name, value) in fixed.named().iter() {
            if !call.contains_name(name) {
                prop_assert_eq!(merged.get(name), Some(value));
            }
        }
        let mut names: Vec<&str> = fixed.named().names().chain(call.named().names()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(merged.named().len(), names.len());
    }

    /// Strict merging fails exactly when a call-time name is already fixed.
    #[test]
    fn prop_strict_merge_detects_collisions(fixed in arguments_strategy(), call in arguments_strategy()) {
        let collides = call.named().names().any(|name| fixed.contains_name(name));
        let bound = make_partial(echo, fixed);

        prop_assert_eq!(bound.call_strict(call).is_err(), collides);
    }

    /// Error transparency: same result, success or failure, as a direct call.
    #[test]
    fn prop_errors_are_transparent(
        numerator in -100_i64..100,
        fixed_denominator in -3_i64..3,
        call_denominator in prop::option::of(-3_i64..3),
    ) {
        let fixed: Arguments<i64> = Arguments::new().with_named("x", fixed_denominator);
        let mut call: Arguments<i64> = Arguments::new().with_positional(numerator);
        if let Some(denominator) = call_denominator {
            call.insert("x", denominator);
        }

        let direct = checked_divide(Arguments::merge(&fixed, call.clone()));
        let bound = make_partial(checked_divide, fixed);

        prop_assert_eq!(bound.call(call), direct);
    }
}
