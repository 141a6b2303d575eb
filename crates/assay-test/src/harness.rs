//! Meta-test harness.
//!
//! Runs a suite against an in-memory host and hands back a [`Transcript`]:
//! the printed lines plus the structured report, so a test about the
//! harness can check what a user would have seen.

use assay_core::{
    CaptureHost, RegistrationError, RunReport, RunSummary, RunnerConfig, Suite, TestRecord,
};

use crate::error::{MetaError, Result};

/// Runs suites in isolation and captures their output.
#[derive(Debug, Clone, Default)]
pub struct MetaHarness {
    config: RunnerConfig,
}

impl MetaHarness {
    /// Creates a harness with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new harness builder.
    #[must_use]
    pub fn builder() -> MetaHarnessBuilder {
        MetaHarnessBuilder::default()
    }

    /// Returns the configuration suites are run with.
    #[must_use]
    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Registers a fresh suite with `register`, runs it, and captures the
    /// result.
    ///
    /// # Errors
    /// Returns [`MetaError::Registration`] if registration fails; nothing
    /// runs in that case.
    pub fn run<F>(&self, register: F) -> Result<Transcript>
    where
        F: FnOnce(&mut Suite) -> std::result::Result<(), RegistrationError>,
    {
        let mut suite = Suite::with_config(self.config.clone());
        register(&mut suite)?;
        tracing::debug!(tests = suite.registry().len(), "meta harness running suite");

        let mut host = CaptureHost::new();
        let report = suite.run_all_tests(&mut host);
        Ok(Transcript {
            gc_calls: host.gc_calls(),
            lines: host.take_lines(),
            report,
        })
    }
}

/// Builder for [`MetaHarness`].
#[derive(Debug, Default)]
pub struct MetaHarnessBuilder {
    config: Option<RunnerConfig>,
    verbose: Option<bool>,
    catch_panics: Option<bool>,
}

impl MetaHarnessBuilder {
    /// Uses `config` as the base configuration.
    #[must_use]
    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides whether assertion diagnostics are printed.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Overrides whether panics in bodies are contained.
    #[must_use]
    pub const fn catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = Some(catch_panics);
        self
    }

    /// Builds the harness.
    #[must_use]
    pub fn build(self) -> MetaHarness {
        let mut config = self.config.unwrap_or_default();
        if let Some(verbose) = self.verbose {
            config.verbose = verbose;
        }
        if let Some(catch_panics) = self.catch_panics {
            config.catch_panics = catch_panics;
        }
        MetaHarness { config }
    }
}

/// Captured output and report of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    report: RunReport,
    gc_calls: usize,
}

impl Transcript {
    /// Printed lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Structured report.
    #[must_use]
    pub const fn report(&self) -> &RunReport {
        &self.report
    }

    /// Aggregate counters.
    #[must_use]
    pub const fn summary(&self) -> RunSummary {
        self.report.summary
    }

    /// Number of `gc` calls made by bodies.
    #[must_use]
    pub const fn gc_calls(&self) -> usize {
        self.gc_calls
    }

    /// Returns true if some line equals `line`.
    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Index of the first line equal to `line`.
    ///
    /// # Errors
    /// Returns [`MetaError::MissingLine`] if no line matches.
    pub fn expect_line(&self, line: &str) -> Result<usize> {
        self.lines
            .iter()
            .position(|l| l == line)
            .ok_or_else(|| MetaError::MissingLine(line.to_owned()))
    }

    /// Whether the named test passed.
    ///
    /// # Errors
    /// Returns [`MetaError::UnknownTest`] if no such test ran.
    pub fn passed(&self, name: &str) -> Result<bool> {
        self.report
            .record(name)
            .map(|r| r.passed)
            .ok_or_else(|| MetaError::UnknownTest(name.to_owned()))
    }

    /// Lines printed while the named test ran, announcement included.
    ///
    /// # Errors
    /// Returns [`MetaError::UnknownTest`] if no such test ran.
    pub fn section(&self, name: &str) -> Result<&[String]> {
        let record = self
            .report
            .record(name)
            .ok_or_else(|| MetaError::UnknownTest(name.to_owned()))?;
        let heading = announcement(record);
        let start = self
            .lines
            .iter()
            .position(|l| *l == heading)
            .ok_or(MetaError::MissingLine(heading))?;

        // The next test's announcement, or the summary block, closes the section.
        let end = match self.report.records.get(record.index) {
            Some(next) => {
                let next = announcement(next);
                self.lines[start + 1..]
                    .iter()
                    .position(|l| *l == next)
                    .map(|offset| start + 1 + offset)
                    .ok_or(MetaError::MissingLine(next))?
            }
            None => self.lines.len().saturating_sub(SUMMARY_LINES).max(start + 1),
        };
        Ok(&self.lines[start..end])
    }
}

/// Lines in the summary block: blank, `SUMMARY`, blank and three counters.
const SUMMARY_LINES: usize = 6;

fn announcement(record: &TestRecord) -> String {
    format!(
        "Running {}test case {}: {} . . .",
        if record.kind.is_death() { "death " } else { "" },
        record.index,
        record.name
    )
}
