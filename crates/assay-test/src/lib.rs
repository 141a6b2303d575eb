// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # assay-test
//!
//! Meta-testing infrastructure for the Assay harness.
//!
//! This crate provides:
//! - **Meta harness**: run a suite against an in-memory host
//! - **Transcripts**: the printed lines plus the structured report
//! - **Falsification tests**: integration tests that try to refute the
//!   harness's claims about ordering, inversion and counting
//!
//! ## Example
//!
//! ```rust
//! use assay_core::predicate::eq;
//! use assay_test::MetaHarness;
//!
//! let transcript = MetaHarness::new().run(|suite| {
//!     suite.test("a", |ctx| {
//!         ctx.assert(eq(1, 2))?;
//!         ctx.end_test()
//!     })
//! })?;
//!
//! assert!(transcript.contains("Expected: 1"));
//! assert_eq!(transcript.summary().failed(), 1);
//! # Ok::<(), assay_test::MetaError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod harness;

pub use error::{MetaError, Result};
pub use harness::{MetaHarness, MetaHarnessBuilder, Transcript};
