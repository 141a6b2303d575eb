//! Assertion engine and the per-test context handed to bodies.
//!
//! A body is a flat sequence of checked predicates:
//!
//! ```rust
//! use assay_core::predicate::{eq, lt};
//! use assay_core::{BodyResult, TestContext};
//!
//! fn body(ctx: &mut TestContext<'_>) -> BodyResult {
//!     ctx.assert(eq(4, 2 + 2))?;
//!     ctx.assert_msg(lt(1, 2), "ordering is broken")?;
//!     ctx.end_test()
//! }
//! ```
//!
//! A failing assertion prints its diagnostic immediately and returns
//! [`AssertionSignal`], which `?` carries straight back to the runner.

use std::fmt::Display;
use std::panic::Location;

use crate::error::{AssertionSignal, BodyResult, CompletionError};
use crate::host::Host;
use crate::predicate::Verdict;
use crate::types::Outcome;
use crate::value::Value;

/// Prefix printed before every assertion failure.
pub const FAILURE_PREFIX: &str = "Failure";

/// Per-test state and host access for a running body.
pub struct TestContext<'a> {
    name: &'a str,
    host: &'a mut dyn Host,
    verbose: bool,
    outcome: Outcome,
    last_failure: Option<&'static Location<'static>>,
}

impl<'a> TestContext<'a> {
    pub(crate) fn new(name: &'a str, host: &'a mut dyn Host, verbose: bool) -> Self {
        Self {
            name,
            host,
            verbose,
            outcome: Outcome::NotRun,
            last_failure: None,
        }
    }

    /// Name of the running test.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name
    }

    /// Current outcome of the body.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Source location of the most recent failed assertion, if any.
    #[must_use]
    pub const fn last_failure(&self) -> Option<&'static Location<'static>> {
        self.last_failure
    }

    /// Checks a predicate result.
    ///
    /// # Errors
    /// Returns [`AssertionSignal`] after printing the diagnostic when the
    /// predicate failed.
    #[track_caller]
    pub fn assert(&mut self, verdict: Verdict) -> Result<(), AssertionSignal> {
        match verdict {
            Ok(()) => Ok(()),
            Err(diagnostic) => Err(self.raise(Location::caller(), &diagnostic, None)),
        }
    }

    /// Checks a predicate result, printing `message` under the diagnostic on
    /// failure.
    ///
    /// # Errors
    /// Returns [`AssertionSignal`] when the predicate failed.
    #[track_caller]
    pub fn assert_msg(
        &mut self,
        verdict: Verdict,
        message: impl Display,
    ) -> Result<(), AssertionSignal> {
        match verdict {
            Ok(()) => Ok(()),
            Err(diagnostic) => Err(self.raise(Location::caller(), &diagnostic, Some(&message))),
        }
    }

    /// Marks the body as completed.
    ///
    /// Must be the body's final expression and must run exactly once.
    ///
    /// # Errors
    /// Returns [`CompletionError::Repeated`] on a second call; the test is
    /// then treated as having raised.
    pub fn end_test(&mut self) -> BodyResult {
        if self.outcome != Outcome::NotRun {
            return Err(CompletionError::Repeated(self.name.to_owned()).into());
        }
        self.outcome = Outcome::Completed;
        Ok(())
    }

    /// Prints a line through the host.
    pub fn print(&mut self, text: impl AsRef<str>) {
        self.host.print(text.as_ref());
    }

    /// Prints the caller's `file:line`.
    #[track_caller]
    pub fn show_file_and_line(&mut self) {
        let location = Location::caller();
        self.host.print(&format!("{}:{}", location.file(), location.line()));
    }

    /// Asks the host to collect garbage.
    pub fn gc(&mut self) {
        self.host.gc();
    }

    /// Encodes `value` as JSON text.
    ///
    /// # Errors
    /// Raises an assertion failure when the value cannot be encoded.
    #[track_caller]
    pub fn json_encode(&mut self, value: &Value) -> Result<String, AssertionSignal> {
        match value.to_json() {
            Some(json) => Ok(json.to_string()),
            None => Err(self.raise(Location::caller(), &"JSONEncode failed", None)),
        }
    }

    /// Decodes JSON text into a value.
    ///
    /// # Errors
    /// Raises an assertion failure when the text is not valid JSON.
    #[track_caller]
    pub fn json_decode(&mut self, text: &str) -> Result<Value, AssertionSignal> {
        let location = Location::caller();
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(json) => Ok(json.into()),
            Err(e) => {
                tracing::debug!(test = self.name, error = %e, "json decode failed");
                Err(self.raise(location, &"JSONDecode failed", None))
            }
        }
    }

    pub(crate) fn mark_raised(&mut self) {
        self.outcome = Outcome::Raised;
    }

    fn raise(
        &mut self,
        location: &'static Location<'static>,
        report: &dyn Display,
        message: Option<&dyn Display>,
    ) -> AssertionSignal {
        tracing::debug!(test = self.name, %location, "assertion failed");
        self.last_failure = Some(location);
        if self.verbose {
            let text = match message {
                Some(message) => format!("{FAILURE_PREFIX}\n{report}\n{message}"),
                None => format!("{FAILURE_PREFIX}\n{report}"),
            };
            self.host.print(&text);
        }
        AssertionSignal
    }
}
