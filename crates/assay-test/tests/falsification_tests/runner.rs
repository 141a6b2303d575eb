//! Falsification Tests: Category B - Execution and Counting (F010-F022)

use std::cell::Cell;
use std::rc::Rc;

use assay_core::predicate::{eq, is_false, is_true, lt, strict_eq};
use assay_core::{Outcome, RunSummary};
use assay_test::MetaHarness;

// =============================================================================
// F010-F013: Pass/fail resolution
// =============================================================================

/// F010: An ordinary test reaching end_test passes and counts once
#[test]
fn f010_completed_test_passes() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("ok", |ctx| {
                ctx.assert(eq(1, 1))?;
                ctx.end_test()
            })
        })
        .unwrap();

    assert_eq!(
        t.summary(),
        RunSummary { total: 1, passed: 1 },
        "F010 FALSIFIED: completed test not counted as passed"
    );
}

/// F011: An ordinary test failing an assertion fails
#[test]
fn f011_assertion_failure_fails() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("bad", |ctx| {
                ctx.assert(eq(1, 2))?;
                ctx.end_test()
            })
        })
        .unwrap();

    assert!(!t.passed("bad").unwrap(), "F011 FALSIFIED: failure counted as pass");
    assert!(t.contains("  Actual: 2"));
    assert!(t.contains("Expected: 1"));
}

/// F012: A death test that raises passes
#[test]
fn f012_death_test_that_dies_passes() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.death_test("c", |ctx| {
                ctx.assert(is_false(true))?;
                ctx.end_test()
            })
        })
        .unwrap();

    assert!(t.passed("c").unwrap(), "F012 FALSIFIED: dying death test failed");
    assert!(t.contains("Death test case 1: c passed"));
}

/// F013: A death test that completes fails
#[test]
fn f013_death_test_that_survives_fails() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.death_test("survivor", |ctx| {
                ctx.assert(is_true(true))?;
                ctx.end_test()
            })
        })
        .unwrap();

    assert!(
        !t.passed("survivor").unwrap(),
        "F013 FALSIFIED: surviving death test passed"
    );
    assert_eq!(t.report().records[0].outcome, Outcome::Completed);
    assert!(!t.lines().iter().any(|l| l.ends_with("survivor passed")));
}

// =============================================================================
// F014-F017: Containment
// =============================================================================

/// F014: Code after a failing assertion never runs
#[test]
fn f014_failure_unwinds_body() {
    let reached = Rc::new(Cell::new(false));
    let flag = Rc::clone(&reached);
    let t = MetaHarness::new()
        .run(move |suite| {
            suite.test("unwinds", move |ctx| {
                ctx.assert(lt(5, 1))?;
                flag.set(true);
                ctx.end_test()
            })
        })
        .unwrap();

    assert!(!reached.get(), "F014 FALSIFIED: body continued after failure");
    assert_eq!(t.summary().failed(), 1);
}

/// F015: A failure never leaks into the next test
#[test]
fn f015_next_test_runs_after_failure() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("fails", |ctx| {
                ctx.assert(eq("a", "b"))?;
                ctx.end_test()
            })?;
            suite.test("passes", |ctx| ctx.end_test())
        })
        .unwrap();

    assert!(t.passed("passes").unwrap(), "F015 FALSIFIED: failure leaked");
}

/// F016: Non-assertion errors are reported and contained
#[test]
fn f016_unexpected_error_reported() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("io", |_ctx| {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "fixture missing").into())
            })?;
            suite.death_test("io_death", |_ctx| Err(anyhow::anyhow!("expected crash")))
        })
        .unwrap();

    assert_eq!(t.section("io").unwrap()[1], "fixture missing");
    assert!(!t.passed("io").unwrap());
    assert!(
        t.passed("io_death").unwrap(),
        "F016 FALSIFIED: unexpected error did not count as death"
    );
}

/// F017: Panics are contained when catch_panics is on
#[test]
fn f017_panic_contained() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.death_test("panics", |_ctx| {
                let items: Vec<i32> = Vec::new();
                let first = items.first().copied();
                assert!(first.is_some(), "empty fixture");
                Ok(())
            })?;
            suite.test("after", |ctx| ctx.end_test())
        })
        .unwrap();

    assert!(t.contains("test body panicked: empty fixture"));
    assert_eq!(
        t.summary(),
        RunSummary { total: 2, passed: 2 },
        "F017 FALSIFIED: panic escaped containment"
    );
}

// =============================================================================
// F018-F022: Transcript and counting
// =============================================================================

/// F018: Announcements precede execution and carry the death qualifier
#[test]
fn f018_announcement_before_body() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("first", |ctx| {
                ctx.print("inside first");
                ctx.end_test()
            })?;
            suite.death_test("second", |ctx| {
                ctx.print("inside second");
                Ok(())
            })
        })
        .unwrap();

    let announce = t.expect_line("Running test case 1: first . . .").unwrap();
    let body = t.expect_line("inside first").unwrap();
    assert!(announce < body, "F018 FALSIFIED: body ran before announcement");
    assert!(t.contains("Running death test case 2: second . . ."));
}

/// F019: Summary block is exact
#[test]
fn f019_summary_block() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("p", |ctx| ctx.end_test())?;
            suite.test("f", |_ctx| Ok(()))?;
            suite.death_test("d", |_ctx| Ok(()))
        })
        .unwrap();

    let start = t.expect_line("SUMMARY").unwrap();
    assert_eq!(
        t.lines()[start - 1..],
        ["", "SUMMARY", "", "3 test cases ran.", "2 passed.", "1 failed."],
        "F019 FALSIFIED: summary block malformed"
    );
}

/// F020: A second end_test flips nothing back
#[test]
fn f020_double_end_test_fails() {
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("twice", |ctx| {
                ctx.end_test()?;
                ctx.end_test()
            })
        })
        .unwrap();

    assert!(!t.passed("twice").unwrap(), "F020 FALSIFIED: double completion passed");
}

/// F021: Quiet mode suppresses diagnostics, not results
#[test]
fn f021_quiet_mode() {
    let t = MetaHarness::builder()
        .verbose(false)
        .build()
        .run(|suite| {
            suite.test("bad", |ctx| {
                ctx.assert(eq(1, 2))?;
                ctx.end_test()
            })
        })
        .unwrap();

    assert!(!t.contains("Failure"));
    assert_eq!(t.summary().failed(), 1, "F021 FALSIFIED: quiet mode changed results");
}

/// F022: The record names the line of the failing assertion
#[test]
fn f022_failure_location_recorded() {
    let line = line!() + 4;
    let t = MetaHarness::new()
        .run(|suite| {
            suite.test("located", |ctx| {
                ctx.assert(strict_eq(0, 1))?;
                ctx.end_test()
            })
        })
        .unwrap();

    assert_eq!(
        t.report().records[0].failed_at.as_deref(),
        Some(format!("{}:{line}", file!()).as_str()),
        "F022 FALSIFIED: failure location missing or wrong"
    );
}
