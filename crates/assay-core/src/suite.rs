//! One test run: a registry plus the configuration to run it with.

use crate::assertion::TestContext;
use crate::config::RunnerConfig;
use crate::error::{BodyResult, RegistrationError};
use crate::host::Host;
use crate::registry::Registry;
use crate::runner::Runner;
use crate::types::RunReport;

/// A suite of tests scoped to a single run.
///
/// Tests are registered first, then [`Suite::run_all_tests`] consumes the
/// suite. Independent suites share no state.
#[derive(Debug, Default)]
pub struct Suite {
    registry: Registry,
    config: RunnerConfig,
}

impl Suite {
    /// Creates an empty suite with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty suite with the given configuration.
    #[must_use]
    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Registers an ordinary test.
    ///
    /// # Errors
    /// Returns an error if `name` is empty or already registered.
    pub fn test<F>(&mut self, name: impl Into<String>, body: F) -> Result<(), RegistrationError>
    where
        F: Fn(&mut TestContext<'_>) -> BodyResult + 'static,
    {
        self.registry.test(name, body)
    }

    /// Registers a death test.
    ///
    /// # Errors
    /// Returns an error if `name` is empty or already registered.
    pub fn death_test<F>(
        &mut self,
        name: impl Into<String>,
        body: F,
    ) -> Result<(), RegistrationError>
    where
        F: Fn(&mut TestContext<'_>) -> BodyResult + 'static,
    {
        self.registry.death_test(name, body)
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs every registered test against `host`.
    pub fn run_all_tests(self, host: &mut dyn Host) -> RunReport {
        Runner::new(self.config).run(&self.registry, host)
    }
}
