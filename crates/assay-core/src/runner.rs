//! Test runner.
//!
//! Executes every registered test in registration order. Each body runs
//! behind a containment boundary: whatever it raises stops that body and
//! nothing else. Pass/fail is resolved from the body's [`Outcome`] and the
//! test's kind, so a death test passes exactly when an ordinary test with
//! the same body would fail.

use std::panic::{self, AssertUnwindSafe, Location};

use crate::assertion::TestContext;
use crate::config::RunnerConfig;
use crate::error::{AssertionSignal, BodyPanic};
use crate::host::Host;
use crate::registry::{Registry, TestCase};
use crate::types::{Outcome, RunReport, RunSummary, TestKind, TestRecord};

/// Sequential test runner.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Creates a runner with the given configuration.
    #[must_use]
    pub const fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Runs every test in `registry`, printing progress and a summary.
    pub fn run(&self, registry: &Registry, host: &mut dyn Host) -> RunReport {
        tracing::info!(tests = registry.len(), "running all tests");
        let mut report = RunReport::default();

        for (i, case) in registry.iter().enumerate() {
            let index = i + 1;
            let kind = case.kind();
            host.print(&format!(
                "Running {}test case {index}: {} . . .",
                if kind.is_death() { "death " } else { "" },
                case.name()
            ));

            let (outcome, failed_at) = self.execute(case, host);
            let passed = outcome.passed(kind);
            report.summary.record(passed);
            if passed {
                host.print(&format!(
                    "{} case {index}: {} passed",
                    match kind {
                        TestKind::Normal => "Test",
                        TestKind::Death => "Death test",
                    },
                    case.name()
                ));
            }
            tracing::debug!(test = case.name(), outcome = ?outcome, passed, "test finished");

            report.records.push(TestRecord {
                index,
                name: case.name().to_owned(),
                kind,
                outcome,
                passed,
                failed_at: failed_at.map(|at| format!("{}:{}", at.file(), at.line())),
            });
        }

        print_summary(host, &report.summary);
        tracing::info!(
            total = report.summary.total,
            passed = report.summary.passed,
            failed = report.summary.failed(),
            "run finished"
        );
        report
    }

    fn execute(
        &self,
        case: &TestCase,
        host: &mut dyn Host,
    ) -> (Outcome, Option<&'static Location<'static>>) {
        let mut ctx = TestContext::new(case.name(), host, self.config.verbose);

        let result = if self.config.catch_panics {
            panic::catch_unwind(AssertUnwindSafe(|| case.invoke(&mut ctx)))
                .unwrap_or_else(|payload| Err(BodyPanic::from_payload(payload.as_ref()).into()))
        } else {
            case.invoke(&mut ctx)
        };

        if let Err(err) = result {
            // Assertion failures were reported where they were raised.
            if err.downcast_ref::<AssertionSignal>().is_none() {
                tracing::warn!(test = case.name(), error = %err, "unexpected error in test body");
                ctx.print(err.to_string());
            }
            ctx.mark_raised();
        }
        (ctx.outcome(), ctx.last_failure())
    }
}

fn print_summary(host: &mut dyn Host, summary: &RunSummary) {
    host.print("\nSUMMARY\n");
    host.print(&format!("{} test cases ran.", summary.total));
    host.print(&format!("{} passed.", summary.passed));
    host.print(&format!("{} failed.", summary.failed()));
}
