//! Falsification Tests: Category A - Registration (F001-F006)

use assay_core::{RegistrationError, Registry, TestKind};
use assay_test::{MetaError, MetaHarness};

// =============================================================================
// F001-F003: Uniqueness
// =============================================================================

/// F001: A duplicate name never replaces the first registration
///
/// # Falsification Attempt
/// Register a passing body, then a failing body under the same name, run.
#[test]
fn f001_duplicate_does_not_overwrite() {
    let mut registry = Registry::new();
    registry.test("same", |ctx| ctx.end_test()).unwrap();
    let second = registry.test("same", |_ctx| Err(anyhow::anyhow!("replaced")));

    assert_eq!(
        second,
        Err(RegistrationError::Duplicate("same".into())),
        "F001 FALSIFIED: duplicate accepted"
    );
    assert_eq!(registry.len(), 1, "F001 FALSIFIED: registry grew");
}

/// F002: A duplicate aborts the run before anything executes
///
/// # Falsification Attempt
/// Register a valid test, then a duplicate, and try to run.
#[test]
fn f002_duplicate_is_fatal_for_the_run() {
    let result = MetaHarness::new().run(|suite| {
        suite.test("first", |ctx| ctx.end_test())?;
        suite.test("first", |ctx| ctx.end_test())?;
        suite.test("second", |ctx| ctx.end_test())
    });

    assert_eq!(
        result,
        Err(MetaError::Registration(RegistrationError::Duplicate(
            "first".into()
        ))),
        "F002 FALSIFIED: run went ahead after duplicate registration"
    );
}

/// F003: Death and ordinary tests share one namespace
#[test]
fn f003_death_test_name_collides_with_test() {
    let mut registry = Registry::new();
    registry.death_test("x", |ctx| ctx.end_test()).unwrap();
    assert!(
        registry.test("x", |ctx| ctx.end_test()).is_err(),
        "F003 FALSIFIED: ordinary test shadowed a death test"
    );
    assert!(registry.is_death_test("x"));
}

// =============================================================================
// F004-F006: Identity
// =============================================================================

/// F004: Empty names are rejected
#[test]
fn f004_empty_name_rejected() {
    let mut registry = Registry::new();
    assert_eq!(
        registry.death_test("", |ctx| ctx.end_test()),
        Err(RegistrationError::EmptyName),
        "F004 FALSIFIED: empty name accepted"
    );
}

/// F005: Only death_test sets the death flag
#[test]
fn f005_death_flag_only_from_death_test() {
    let mut registry = Registry::new();
    registry.test("n", |ctx| ctx.end_test()).unwrap();
    registry.death_test("d", |ctx| ctx.end_test()).unwrap();

    let kinds: Vec<_> = registry.iter().map(|c| (c.name().to_owned(), c.kind())).collect();
    assert_eq!(
        kinds,
        [
            ("n".to_owned(), TestKind::Normal),
            ("d".to_owned(), TestKind::Death)
        ],
        "F005 FALSIFIED: death flag misattributed"
    );
}

/// F006: Names are case-sensitive and otherwise arbitrary
#[test]
fn f006_names_are_exact() {
    let mut registry = Registry::new();
    for name in ["Case", "case", "case ", "случай", "a.b/c"] {
        assert!(
            registry.test(name, |ctx| ctx.end_test()).is_ok(),
            "F006 FALSIFIED: {name:?} rejected"
        );
    }
    assert_eq!(registry.len(), 5);
}
