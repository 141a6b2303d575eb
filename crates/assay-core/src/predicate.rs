//! Predicate library.
//!
//! Every predicate is a pure function returning a [`Verdict`]: `Ok(())` on
//! success, or a [`Diagnostic`] describing the actual value and the
//! expected condition. Predicates never abort anything themselves; pass
//! their result to [`TestContext::assert`](crate::assertion::TestContext::assert).
//!
//! For two-argument predicates the first argument is the expected side and
//! the second the actual value, so `eq(1, x)` reads "expected 1, got x".

use crate::value::Value;

/// Result of evaluating a predicate.
pub type Verdict = Result<(), Diagnostic>;

/// Two-line failure description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("  Actual: {actual}\nExpected: {expected}")]
pub struct Diagnostic {
    /// Description of the expected condition.
    pub expected: String,
    /// The actual value, rendered.
    pub actual: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(expected: impl Into<String>, actual: &Value) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }
}

fn check(ok: bool, expected: impl FnOnce() -> String, actual: &Value) -> Verdict {
    if ok {
        Ok(())
    } else {
        Err(Diagnostic::new(expected(), actual))
    }
}

// ============================================================================
// Truthiness
// ============================================================================

/// Succeeds if `arg` is truthy.
///
/// Not a boolean check: `is_true(1)` and `is_true("x")` succeed too. Use
/// [`strict_eq`] to test for exactly `true`.
pub fn is_true(arg: impl Into<Value>) -> Verdict {
    let arg = arg.into();
    check(arg.is_truthy(), || "true equivalent".into(), &arg)
}

/// Succeeds if `arg` is falsy.
///
/// Cannot tell `false` apart from `0`, `""`, `null` and friends. Use
/// [`strict_eq`] to test for exactly `false`.
pub fn is_false(arg: impl Into<Value>) -> Verdict {
    let arg = arg.into();
    check(!arg.is_truthy(), || "false equivalent".into(), &arg)
}

// ============================================================================
// Nullity
// ============================================================================

/// Succeeds if `arg` is `null` or `undefined`.
pub fn is_null(arg: impl Into<Value>) -> Verdict {
    let arg = arg.into();
    check(arg.loose_eq(&Value::Null), || "null".into(), &arg)
}

/// Succeeds unless `arg` is `null` or `undefined`.
pub fn not_null(arg: impl Into<Value>) -> Verdict {
    let arg = arg.into();
    check(!arg.loose_eq(&Value::Null), || "not null".into(), &arg)
}

/// Succeeds if `arg` loosely equals `undefined`, which `null` also does.
pub fn is_undefined(arg: impl Into<Value>) -> Verdict {
    let arg = arg.into();
    check(arg.loose_eq(&Value::Undefined), || "undefined".into(), &arg)
}

/// Succeeds unless `arg` loosely equals `undefined`.
pub fn not_undefined(arg: impl Into<Value>) -> Verdict {
    let arg = arg.into();
    check(!arg.loose_eq(&Value::Undefined), || "not undefined".into(), &arg)
}

// ============================================================================
// NaN
// ============================================================================

/// Succeeds if `arg` coerces to NaN.
pub fn is_nan(arg: impl Into<Value>) -> Verdict {
    let arg = arg.into();
    check(arg.to_number().is_nan(), || "NaN".into(), &arg)
}

/// Succeeds unless `arg` coerces to NaN.
pub fn not_nan(arg: impl Into<Value>) -> Verdict {
    let arg = arg.into();
    check(!arg.to_number().is_nan(), || "not NaN".into(), &arg)
}

// ============================================================================
// Equality
// ============================================================================

/// Loose equality.
pub fn eq(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    check(expected.loose_eq(&actual), || expected.to_string(), &actual)
}

/// Loose inequality.
pub fn ne(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    check(!expected.loose_eq(&actual), || format!("!={expected}"), &actual)
}

/// Strict equality.
pub fn strict_eq(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    check(expected.strict_eq(&actual), || expected.to_string(), &actual)
}

/// Strict inequality.
pub fn strict_ne(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    check(!expected.strict_eq(&actual), || format!("!=={expected}"), &actual)
}

// ============================================================================
// Ordering
// ============================================================================

/// Succeeds if `lhs < rhs`.
pub fn lt(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Verdict {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    let ok = lhs.loose_cmp(&rhs).is_some_and(std::cmp::Ordering::is_lt);
    check(ok, || format!("<{lhs}"), &rhs)
}

/// Succeeds if `lhs <= rhs`.
pub fn le(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Verdict {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    let ok = lhs.loose_cmp(&rhs).is_some_and(std::cmp::Ordering::is_le);
    check(ok, || format!("<= {lhs}"), &rhs)
}

/// Succeeds if `lhs > rhs`.
pub fn gt(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Verdict {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    let ok = lhs.loose_cmp(&rhs).is_some_and(std::cmp::Ordering::is_gt);
    check(ok, || format!(">{lhs}"), &rhs)
}

/// Nominally `lhs >= rhs`, but succeeds whenever the operands are loosely
/// *unequal*.
///
/// This keeps the behaviour suites were written against: `ge(2, 2)` fails
/// and `ge(1, 2)` succeeds. Use [`le`] with swapped operands for a real
/// greater-or-equal check.
pub fn ge(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Verdict {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    check(!lhs.loose_eq(&rhs), || format!(">={lhs}"), &rhs)
}

// ============================================================================
// Sequences
// ============================================================================

fn sequence_equals(a: &Value, b: &Value, same: fn(&Value, &Value) -> bool) -> bool {
    let (a, b) = (
        a.as_array().unwrap_or_default(),
        b.as_array().unwrap_or_default(),
    );
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same(x, y))
}

/// Element-wise loose equality of two arrays of equal length.
pub fn array_eq(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    let ok = sequence_equals(&expected, &actual, Value::loose_eq);
    check(ok, || format!("ARRAY=={expected}"), &actual)
}

/// Negation of [`array_eq`].
pub fn array_ne(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    let ok = !sequence_equals(&expected, &actual, Value::loose_eq);
    check(ok, || format!("ARRAY!={expected}"), &actual)
}

/// Element-wise strict equality of two arrays of equal length.
pub fn array_strict_eq(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    let ok = sequence_equals(&expected, &actual, Value::strict_eq);
    check(ok, || format!("ARRAY==={expected}"), &actual)
}

/// Negation of [`array_strict_eq`].
pub fn array_strict_ne(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    let ok = !sequence_equals(&expected, &actual, Value::strict_eq);
    check(ok, || format!("ARRAY!=={expected}"), &actual)
}

// ============================================================================
// Records
// ============================================================================

// Only the keys of `a` are visited: a key present solely in `b` never
// makes two records unequal.
fn record_equals(a: &Value, b: &Value, same: fn(&Value, &Value) -> bool) -> bool {
    a.as_object()
        .is_none_or(|fields| fields.iter().all(|(key, v)| same(v, b.property(key))))
}

/// Field-wise loose equality over the keys of `expected`.
pub fn object_eq(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    let ok = record_equals(&expected, &actual, Value::loose_eq);
    check(ok, || format!("OBJECT=={expected}"), &actual)
}

/// Negation of [`object_eq`].
pub fn object_ne(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    let ok = !record_equals(&expected, &actual, Value::loose_eq);
    check(ok, || format!("OBJECT!={expected}"), &actual)
}

/// Field-wise strict equality over the keys of `expected`.
pub fn object_strict_eq(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    let ok = record_equals(&expected, &actual, Value::strict_eq);
    check(ok, || format!("OBJECT==={expected}"), &actual)
}

/// Negation of [`object_strict_eq`].
pub fn object_strict_ne(expected: impl Into<Value>, actual: impl Into<Value>) -> Verdict {
    let (expected, actual) = (expected.into(), actual.into());
    let ok = !record_equals(&expected, &actual, Value::strict_eq);
    check(ok, || format!("OBJECT!=={expected}"), &actual)
}
