//! Assay Demo Suite
//!
//! Registers a handful of tests covering every predicate family, including
//! one deliberately failing test and two death tests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example suite
//!
//! # Quiet diagnostics and debug logging
//! echo 'verbose = false' > /tmp/assay.toml
//! ASSAY_CONFIG=/tmp/assay.toml RUST_LOG=assay_core=debug cargo run --example suite
//! ```

use std::process::ExitCode;

use assay::prelude::*;

fn main() -> ExitCode {
    assay::launch(|suite| {
        suite.test("truthiness", |ctx| {
            ctx.assert(is_true(1))?;
            ctx.assert(is_true("non-empty"))?;
            ctx.assert(is_false(""))?;
            ctx.assert(is_false(Value::Null))?;
            ctx.end_test()
        })?;

        suite.test("nullity_and_nan", |ctx| {
            ctx.assert(is_null(Value::Undefined))?;
            ctx.assert(not_null(0))?;
            ctx.assert(is_undefined(Value::Undefined))?;
            ctx.assert(is_nan("not a number"))?;
            ctx.assert(not_nan("42"))?;
            ctx.end_test()
        })?;

        suite.test("equality", |ctx| {
            ctx.assert(eq(1, "1"))?;
            ctx.assert(strict_ne(1, "1"))?;
            ctx.assert(strict_eq("abc", "abc"))?;
            ctx.assert(lt(1, 2))?;
            ctx.assert(le(2, 2))?;
            ctx.assert(gt("b", "a"))?;
            ctx.end_test()
        })?;

        suite.test("containers", |ctx| {
            ctx.assert(array_eq([1, 2, 3], [1, 2, 3]))?;
            ctx.assert(array_strict_ne([1, 2], ["1", "2"]))?;
            let config = ctx.json_decode(r#"{"name": "demo", "retries": 3, "debug": false}"#)?;
            ctx.assert(object_eq(Value::object([("retries", "3")]), config.clone()))?;
            ctx.assert(object_strict_ne(Value::object([("retries", "3")]), config))?;
            ctx.end_test()
        })?;

        suite.test("reports_a_failure", |ctx| {
            ctx.assert_msg(eq(10, 5 * 3), "multiplication table is off")?;
            ctx.end_test()
        })?;

        suite.test("gc_is_available", |ctx| {
            ctx.gc();
            ctx.end_test()
        })?;

        suite.death_test("dies_on_assertion", |ctx| {
            ctx.assert(is_false(true))?;
            ctx.end_test()
        })?;

        suite.death_test("dies_on_bad_json", |ctx| {
            let _ = ctx.json_decode("{ not json")?;
            ctx.end_test()
        })
    })
}
