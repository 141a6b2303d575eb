//! Test registry.
//!
//! An insertion-ordered collection of named bodies. Names are unique; a
//! duplicate is rejected rather than replacing the earlier test.

use std::collections::HashSet;
use std::fmt;

use crate::assertion::TestContext;
use crate::error::{BodyResult, RegistrationError};
use crate::types::TestKind;

/// A test body.
pub type TestBody = Box<dyn Fn(&mut TestContext<'_>) -> BodyResult>;

/// A registered test.
pub struct TestCase {
    name: String,
    kind: TestKind,
    body: TestBody,
}

impl TestCase {
    /// Registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normal or death test.
    #[must_use]
    pub const fn kind(&self) -> TestKind {
        self.kind
    }

    pub(crate) fn invoke(&self, ctx: &mut TestContext<'_>) -> BodyResult {
        (self.body)(ctx)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered set of registered tests.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
    names: HashSet<String>,
    death: HashSet<String>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an ordinary test.
    ///
    /// # Errors
    /// Returns an error if `name` is empty or already registered.
    pub fn test<F>(&mut self, name: impl Into<String>, body: F) -> Result<(), RegistrationError>
    where
        F: Fn(&mut TestContext<'_>) -> BodyResult + 'static,
    {
        self.insert(name.into(), TestKind::Normal, Box::new(body))
    }

    /// Registers a test expected to raise before completing.
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
        self.insert(name.into(), TestKind::Death, Box::new(body))
    }

    fn insert(
        &mut self,
        name: String,
        kind: TestKind,
        body: TestBody,
    ) -> Result<(), RegistrationError> {
        if name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if !self.names.insert(name.clone()) {
            tracing::warn!(name = %name, "duplicate test registration");
            return Err(RegistrationError::Duplicate(name));
        }
        if kind.is_death() {
            self.death.insert(name.clone());
        }
        tracing::debug!(name = %name, kind = ?kind, index = self.cases.len() + 1, "registered test");
        self.cases.push(TestCase { name, kind, body });
        Ok(())
    }

    /// Returns true if a test named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns true if `name` is registered as a death test.
    #[must_use]
    pub fn is_death_test(&self, name: &str) -> bool {
        self.death.contains(name)
    }

    /// Number of registered tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Registered tests in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }
}
