// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # assay-core
//!
//! Registration, assertion and execution core of the Assay test harness.
//!
//! - [`predicate`]: pure comparison functions returning a [`Verdict`]
//! - [`TestContext`]: the assertion engine handed to every test body
//! - [`Registry`] / [`Suite`]: named tests and death tests, in order
//! - [`Runner`]: sequential execution with per-test containment
//!
//! ## Example
//!
//! ```rust
//! use assay_core::predicate::{array_eq, eq, is_false};
//! use assay_core::{CaptureHost, Suite};
//!
//! let mut suite = Suite::new();
//! suite.test("arithmetic", |ctx| {
//!     ctx.assert(eq(4, 2 + 2))?;
//!     ctx.assert(array_eq([1, 2, 3], [1, 2, 3]))?;
//!     ctx.end_test()
//! })?;
//! suite.death_test("must_die", |ctx| {
//!     ctx.assert(is_false(true))?;
//!     ctx.end_test()
//! })?;
//!
//! let mut host = CaptureHost::new();
//! let report = suite.run_all_tests(&mut host);
//! assert_eq!(report.summary.passed, 2);
//! # Ok::<(), assay_core::RegistrationError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assertion;
pub mod config;
pub mod error;
pub mod host;
pub mod predicate;
pub mod registry;
pub mod runner;
pub mod suite;
#[cfg(test)]
pub mod tests;
pub mod types;
pub mod value;

pub use assertion::TestContext;
pub use config::RunnerConfig;
pub use error::{
    AssertionSignal, BodyPanic, BodyResult, CompletionError, HarnessError, RegistrationError,
    Result,
};
pub use host::{CaptureHost, Host, StdoutHost};
pub use predicate::{Diagnostic, Verdict};
pub use registry::{Registry, TestBody, TestCase};
pub use runner::Runner;
pub use suite::Suite;
pub use types::{Outcome, QuitCode, RunReport, RunSummary, TestKind, TestRecord};
pub use value::{Record, Value};
