//! Unit tests for argument bags and dynamic values.

use lambind::arguments::{Arguments, NamedArguments};
use lambind::error::{ArgumentError, ValueTypeError};
use lambind::value::{FromValue, Value};
use lambind::args;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_builder_matches_macro() {
    let built: Arguments = Arguments::new()
        .with_positional(1)
        .with_positional("two")
        .with_named("na_rm", true);

    assert_eq!(built, args![1, "two"; na_rm = true]);
}

#[rstest]
fn test_collect_into_positional() {
    let arguments: Arguments<i32> = (1..=3).collect();
    assert_eq!(arguments.positional(), &[1, 2, 3]);
    assert!(arguments.named().is_empty());
}

#[rstest]
fn test_extend_appends_positional() {
    let mut arguments: Arguments<i32> = args![1; x = 0];
    arguments.extend([2, 3]);
    assert_eq!(arguments.positional(), &[1, 2, 3]);
    assert_eq!(arguments.get("x"), Some(&0));
}

#[rstest]
fn test_insert_returns_replaced_value() {
    let mut arguments: Arguments<i32> = Arguments::new();
    assert_eq!(arguments.insert("x", 1), None);
    assert_eq!(arguments.insert("x", 2), Some(1));
    assert_eq!(arguments.named().len(), 1);
}

#[rstest]
fn test_into_parts_round_trips_through_from_parts() {
    let original: Arguments<i32> = args![1, 2; x = 3];
    let (positional, named) = original.clone().into_parts();

    assert_eq!(Arguments::from_parts(positional, named), original);
}

#[rstest]
fn test_named_arguments_from_pairs_keeps_first_slot() {
    let named: NamedArguments<i32> = vec![("b", 1), ("a", 2), ("b", 3)].into_iter().collect();
    assert_eq!(named.iter().collect::<Vec<_>>(), vec![("b", &3), ("a", &2)]);
}

// =============================================================================
// Merging
// =============================================================================

#[rstest]
#[case(args![1; x = 1], args![2; x = 2], "(1, 2, x = 2)")]
#[case(args![; x = 1, y = 2], args![; y = 0, z = 3], "(x = 1, y = 0, z = 3)")]
#[case(args![], args![; x = 1], "(x = 1)")]
#[case(args![1, 2], args![], "(1, 2)")]
fn test_merge_rendering(#[case] fixed: Arguments, #[case] call: Arguments, #[case] expected: &str) {
    assert_eq!(Arguments::merge(&fixed, call).to_string(), expected);
}

#[rstest]
fn test_try_merge_reports_first_collision() {
    let fixed: Arguments = args![; x = 1, y = 2];
    let result = Arguments::try_merge(&fixed, args![; z = 0, y = 3, x = 4]);

    assert_eq!(
        result,
        Err(ArgumentError::AlreadyFixed {
            name: "y".to_string()
        })
    );
}

#[rstest]
fn test_try_merge_matches_merge_without_collision() {
    let fixed: Arguments = args![1; x = 1];
    let call: Arguments = args![2; y = 2];

    assert_eq!(
        Arguments::try_merge(&fixed, call.clone()),
        Ok(Arguments::merge(&fixed, call))
    );
}

// =============================================================================
// Typed accessors
// =============================================================================

#[rstest]
fn test_require_reads_typed_values() {
    let arguments: Arguments = args![2.5, "label", vec![1, 2]; n = 3, flag = true];

    assert_eq!(arguments.require::<f64>(0), Ok(2.5));
    assert_eq!(arguments.require::<String>(1), Ok("label".to_string()));
    assert_eq!(
        arguments.require::<Vec<Value>>(2),
        Ok(vec![Value::Int(1), Value::Int(2)])
    );
    assert_eq!(arguments.require_named::<i64>("n"), Ok(3));
    assert_eq!(arguments.require_named::<bool>("flag"), Ok(true));
}

#[rstest]
#[case(5, ArgumentError::MissingPositional { index: 5 })]
#[case(
    1,
    ArgumentError::WrongType {
        argument: "#1".to_string(),
        source: ValueTypeError { expected: "float", found: "string" },
    }
)]
fn test_require_errors(#[case] index: usize, #[case] expected: ArgumentError) {
    let arguments: Arguments = args![1.0, "text"];
    assert_eq!(arguments.require::<f64>(index), Err(expected));
}

#[rstest]
fn test_require_named_missing() {
    let arguments: Arguments = args![1];
    assert_eq!(
        arguments.require_named::<bool>("na_rm"),
        Err(ArgumentError::MissingNamed {
            name: "na_rm".to_string()
        })
    );
}

#[rstest]
fn test_named_or_rejects_wrong_kind() {
    let arguments: Arguments = args![; na_rm = 1];
    assert_eq!(
        arguments.named_or("na_rm", false),
        Err(ArgumentError::WrongType {
            argument: "`na_rm`".to_string(),
            source: ValueTypeError {
                expected: "bool",
                found: "int",
            },
        })
    );
}

#[rstest]
#[case(args![1, 2], 2, Ok(()))]
#[case(args![1], 2, Err(ArgumentError::UnexpectedPositional { expected: 2, found: 1 }))]
#[case(args![; x = 1], 0, Ok(()))]
fn test_expect_positional_count(
    #[case] arguments: Arguments,
    #[case] expected: usize,
    #[case] outcome: Result<(), ArgumentError>,
) {
    assert_eq!(arguments.expect_positional_count(expected), outcome);
}

#[rstest]
fn test_reject_unknown() {
    let arguments: Arguments = args![1; na_rm = true, colour = "red"];

    assert_eq!(arguments.reject_unknown(&["na_rm", "colour"]), Ok(()));
    assert_eq!(
        arguments.reject_unknown(&["na_rm"]),
        Err(ArgumentError::UnknownName {
            name: "colour".to_string()
        })
    );
}

// =============================================================================
// Values
// =============================================================================

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::Bool(true), "bool")]
#[case(Value::Int(1), "int")]
#[case(Value::Float(1.0), "float")]
#[case(Value::from("a"), "string")]
#[case(Value::from(vec![1]), "list")]
fn test_value_kind(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.kind(), expected);
}

#[rstest]
fn test_value_collects_from_iterator() {
    let value: Value = (1_i64..=3).collect();
    assert_eq!(value.as_list().map(<[Value]>::len), Some(3));
}

#[rstest]
fn test_from_value_for_value_clones() {
    let original = Value::from(vec![Some(1.5), None]);
    assert_eq!(Value::from_value(&original), Ok(original.clone()));
}

#[rstest]
fn test_arguments_display_with_strings_and_lists() {
    let arguments: Arguments = args![vec![Some(true), None], "x"; label = "mean"];
    assert_eq!(
        arguments.to_string(),
        r#"([true, null], "x", label = "mean")"#
    );
}
