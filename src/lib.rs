//! Assay: a minimal sequential unit-test harness.
//!
//! Register named tests and death tests, run them in order, and read the
//! summary. Assertion failures abort only the test that raised them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use assay::prelude::*;
//!
//! fn main() -> std::process::ExitCode {
//!     assay::launch(|suite| {
//!         suite.test("addition", |ctx| {
//!             ctx.assert(eq(4, 2 + 2))?;
//!             ctx.end_test()
//!         })?;
//!         suite.death_test("must_fail", |ctx| {
//!             ctx.assert(is_true(0))?;
//!             ctx.end_test()
//!         })
//!     })
//! }
//! ```

pub mod launch;

pub use assay_core as core;
pub use launch::{init_tracing, launch, launch_with};

/// Prelude module for common imports.
pub mod prelude {
    pub use assay_core::predicate::*;
    pub use assay_core::{
        BodyResult, CaptureHost, Host, RegistrationError, RunReport, RunSummary, RunnerConfig,
        StdoutHost, Suite, TestContext, Value,
    };
}
