//! Falsification Tests: Category C - Predicates (F030-F041)

use assay_core::Value;
use assay_core::predicate::{
    Diagnostic, array_eq, array_ne, array_strict_eq, eq, ge, gt, is_nan, is_null, is_true,
    is_undefined, le, lt, ne, object_eq, object_strict_eq, strict_eq, strict_ne,
};
use assay_test::MetaHarness;
use proptest::prelude::*;

// =============================================================================
// F030-F033: Equality and ordering
// =============================================================================

/// F030: Loose and strict equality disagree on coercion
#[test]
fn f030_loose_versus_strict() {
    assert!(eq(1, "1").is_ok(), "F030 FALSIFIED: loose eq did not coerce");
    assert!(strict_eq(1, "1").is_err(), "F030 FALSIFIED: strict eq coerced");
    assert!(strict_ne(1, "1").is_ok());
    assert!(eq(Value::Null, Value::Undefined).is_ok());
    assert!(strict_eq(Value::Null, Value::Undefined).is_err());
}

/// F031: NaN equals nothing, itself included
#[test]
fn f031_nan_is_unequal() {
    let nan = Value::from(f64::NAN);
    assert!(eq(nan.clone(), nan.clone()).is_err(), "F031 FALSIFIED: NaN == NaN");
    assert!(ne(nan.clone(), nan.clone()).is_ok());
    assert!(lt(nan.clone(), 1).is_err());
    assert!(gt(nan, 1).is_err());
    assert!(is_nan("abc").is_ok());
}

/// F032: Ordering is lexicographic for strings and numeric otherwise
#[test]
fn f032_ordering() {
    assert!(lt("10", "9").is_ok(), "F032 FALSIFIED: strings compared numerically");
    assert!(lt(9, "10").is_ok(), "F032 FALSIFIED: mixed operands compared as text");
    assert!(le(2, 2).is_ok());
    assert!(gt(3, 2).is_ok());
}

/// F033: ge succeeds on inequality, not on greater-or-equal
///
/// # Falsification Attempt
/// Show ge behaving like a real >= check.
#[test]
fn f033_ge_checks_inequality() {
    assert!(ge(2, 2).is_err(), "F033 FALSIFIED: ge(2, 2) succeeded");
    assert!(ge(1, 2).is_ok(), "F033 FALSIFIED: ge(1, 2) failed");
    assert!(ge(3, 2).is_ok());
    assert_eq!(ge(5, "5").unwrap_err().expected, ">=5");
}

// =============================================================================
// F034-F037: Containers
// =============================================================================

/// F034: Arrays compare element-wise after a length check
#[test]
fn f034_array_length_and_elements() {
    assert!(array_eq([1, 2, 3], [1, 2, 3]).is_ok());
    assert!(
        array_eq([1, 2], [1, 2, 3]).is_err(),
        "F034 FALSIFIED: prefix treated as equal"
    );
    assert!(array_eq(Value::array([1, 2]), Value::array(["1", "2"])).is_ok());
    assert!(array_strict_eq(Value::array([1, 2]), Value::array(["1", "2"])).is_err());
    assert!(array_ne([1], [2]).is_ok());
}

/// F035: A non-array operand behaves as an empty sequence
#[test]
fn f035_non_array_is_empty() {
    assert!(array_eq(Value::Array(Vec::new()), 7).is_ok());
    assert!(
        array_eq([1], 7).is_err(),
        "F035 FALSIFIED: scalar matched a non-empty array"
    );
}

/// F036: Only the first record's keys are compared
#[test]
fn f036_record_comparison_is_one_sided() {
    let small = Value::object([("a", 1)]);
    let large = Value::object([("a", Value::from(1)), ("b", Value::from(2))]);
    assert!(object_eq(small.clone(), large.clone()).is_ok());
    assert!(
        object_eq(large, small).is_err(),
        "F036 FALSIFIED: missing key went unnoticed"
    );
}

/// F037: Record fields honour loose versus strict equality
#[test]
fn f037_record_field_equality() {
    let text = Value::object([("n", "1")]);
    let number = Value::object([("n", 1)]);
    assert!(object_eq(text.clone(), number.clone()).is_ok());
    assert!(
        object_strict_eq(text, number).is_err(),
        "F037 FALSIFIED: strict record compare coerced a field"
    );
}

// =============================================================================
// F038-F041: Diagnostics
// =============================================================================

/// F038: Diagnostics are two lines, actual first
#[test]
fn f038_diagnostic_shape() {
    let d = eq(1, 2).unwrap_err();
    assert_eq!(d, Diagnostic {
        expected: "1".into(),
        actual: "2".into(),
    });
    assert_eq!(d.to_string(), "  Actual: 2\nExpected: 1");
}

/// F039: Nullity and truthiness diagnostics name the condition
#[test]
fn f039_condition_diagnostics() {
    assert_eq!(is_true(0).unwrap_err().expected, "true equivalent");
    assert_eq!(is_null(0).unwrap_err().expected, "null");
    assert!(
        is_undefined(Value::Null).is_ok(),
        "F039 FALSIFIED: null not accepted as undefined"
    );
}

/// F040: A message follows the diagnostic in the transcript
#[test]
fn f040_message_after_diagnostic() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("m", |ctx| {
                ctx.assert_msg(array_eq([1, 2], [1, 2, 3]), "lengths differ")?;
                ctx.end_test()
            })
        })
        .unwrap();

    assert_eq!(
        t.section("m").unwrap(),
        [
            "Running test case 1: m . . .",
            "Failure",
            "  Actual: 1,2,3",
            "Expected: ARRAY==1,2",
            "lengths differ",
        ],
        "F040 FALSIFIED: failure report malformed"
    );
}

proptest! {
    /// F041: eq and ne never agree on any pair of numbers or strings
    #[test]
    fn f041_eq_ne_complementary(a in any::<i32>(), b in "[0-9]{0,3}") {
        prop_assert_ne!(eq(a, b.as_str()).is_ok(), ne(a, b.as_str()).is_ok());
        prop_assert_ne!(eq(a, a).is_ok(), ne(a, a).is_ok());
    }
}
