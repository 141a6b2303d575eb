//! Error types for assay-core.
//!
//! Two tiers: [`AssertionSignal`] unwinds a single test body and is recovered
//! by the runner, while [`RegistrationError`] and [`HarnessError`] are
//! framework-fatal and end the whole run.

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Result type returned by test bodies.
///
/// Any error may be propagated with `?`; the runner tells an
/// [`AssertionSignal`] apart from everything else by downcasting.
pub type BodyResult = anyhow::Result<()>;

/// Raised by a failing assertion to abort the current test body.
///
/// Carries no payload: the diagnostic has already been printed at the
/// point of failure, so the runner swallows this signal silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("assertion signal")]
pub struct AssertionSignal;

/// A panic contained at the runner boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("test body panicked: {0}")]
pub struct BodyPanic(pub String);

impl BodyPanic {
    /// Extracts the message from a panic payload.
    #[must_use]
    pub fn from_payload(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());
        Self(message)
    }
}

/// Rejected test registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A test with this name is already registered.
    #[error("Duplicate test case name: {0}")]
    Duplicate(String),

    /// Test names must be non-empty.
    #[error("Empty test case name")]
    EmptyName,
}

/// Errors raised while completing a test body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// `end_test` was invoked more than once in the same body.
    #[error("END_TEST called more than once in test case: {0}")]
    Repeated(String),
}

/// Framework-level errors.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Registration error.
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the quit code the launcher should exit with.
    #[must_use]
    pub const fn quit_code(&self) -> crate::types::QuitCode {
        match self {
            Self::Registration(_) => crate::types::QuitCode::JsError,
            Self::Config(_) | Self::Io(_) => crate::types::QuitCode::Error,
        }
    }
}
