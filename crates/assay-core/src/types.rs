//! Core types for test identity, outcomes and run accounting.

use serde::{Deserialize, Serialize};

/// Whether a test is expected to complete or to die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TestKind {
    /// Passes when the body reaches `end_test`.
    #[default]
    Normal,
    /// Passes when the body raises before reaching `end_test`.
    Death,
}

impl TestKind {
    /// Returns true for death tests.
    #[must_use]
    pub const fn is_death(self) -> bool {
        matches!(self, Self::Death)
    }
}

/// What happened to a test body.
///
/// ```text
/// NotRun ──end_test──► Completed
///    │                    │
///    └──error/panic──► Raised ◄──┘ (error after end_test)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// The body has not signalled completion.
    #[default]
    NotRun,
    /// The body reached `end_test`.
    Completed,
    /// The body raised an assertion signal or another error.
    Raised,
}

impl Outcome {
    /// Resolves pass/fail from the outcome and the test's kind.
    ///
    /// A normal test passes only when completed; a death test passes
    /// in every other case.
    #[must_use]
    pub const fn passed(self, kind: TestKind) -> bool {
        matches!(self, Self::Completed) != kind.is_death()
    }
}

/// Result of one executed test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// 1-based position in the run.
    pub index: usize,
    /// Registered name.
    pub name: String,
    /// Normal or death test.
    pub kind: TestKind,
    /// Final body outcome.
    pub outcome: Outcome,
    /// Whether the test counts as passed.
    pub passed: bool,
    /// `file:line` of the assertion that failed, if one did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<String>,
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tests executed.
    pub total: usize,
    /// Tests that passed.
    pub passed: usize,
}

impl RunSummary {
    /// Tests that failed.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total.saturating_sub(self.passed)
    }

    /// Returns true when every executed test passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.total == self.passed
    }

    pub(crate) fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Per-test records in execution order.
    pub records: Vec<TestRecord>,
    /// Aggregate counters.
    pub summary: RunSummary,
}

impl RunReport {
    /// Looks up a record by test name.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&TestRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

/// Process exit codes understood by the shell hosting a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuitCode {
    /// Normal completion.
    Ok,
    /// Generic infrastructure failure.
    Error,
    /// Script-level fatal error such as a duplicate registration.
    JsError,
    /// Reserved for catastrophic assertion infrastructure failures.
    Assert,
}

impl QuitCode {
    /// Returns the numeric exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Error => -1,
            Self::JsError => -2,
            Self::Assert => -3,
        }
    }
}

impl From<QuitCode> for std::process::ExitCode {
    fn from(code: QuitCode) -> Self {
        // Negative codes wrap the same way the C shell's return value does.
        Self::from(code.code() as u8)
    }
}
