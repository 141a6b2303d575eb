//! Host surface: where a run writes its output.
//!
//! The runner and the assertion engine only ever talk to a [`Host`], so the
//! same suite can print to stdout or be captured in memory for meta-testing.

use std::io::Write;

/// Services the environment provides to a run.
pub trait Host {
    /// Writes `text` followed by a newline.
    fn print(&mut self, text: &str);

    /// Garbage-collection trigger for test bodies.
    ///
    /// The harness itself never calls this.
    fn gc(&mut self) {}
}

/// Host writing to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutHost;

impl StdoutHost {
    /// Creates a stdout host.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Host for StdoutHost {
    fn print(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to write test output");
        }
    }

    fn gc(&mut self) {
        tracing::debug!("gc requested by test body");
    }
}

/// Host recording everything in memory.
#[derive(Debug, Default, Clone)]
pub struct CaptureHost {
    lines: Vec<String>,
    gc_calls: usize,
}

impl CaptureHost {
    /// Creates an empty capture host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output, one entry per line.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Captured output as a single newline-terminated string.
    #[must_use]
    pub fn output(&self) -> String {
        self.lines.iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
    }

    /// Returns true if some captured line equals `line`.
    #[must_use]
    pub fn contains_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Number of `gc` calls.
    #[must_use]
    pub const fn gc_calls(&self) -> usize {
        self.gc_calls
    }

    /// Takes the captured lines, leaving the host empty.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Host for CaptureHost {
    fn print(&mut self, text: &str) {
        self.lines.extend(text.split('\n').map(str::to_owned));
    }

    fn gc(&mut self) {
        self.gc_calls += 1;
    }
}
