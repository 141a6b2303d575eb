//! Meta-testing error types.

use assay_core::RegistrationError;

/// Result type alias for meta-testing operations.
pub type Result<T> = std::result::Result<T, MetaError>;

/// Meta-testing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetaError {
    /// The suite under test could not be registered.
    #[error("registration failed: {0}")]
    Registration(#[from] RegistrationError),

    /// An expected transcript line was not printed.
    #[error("line not found in transcript: {0:?}")]
    MissingLine(String),

    /// No test with this name ran.
    #[error("unknown test: {0}")]
    UnknownTest(String),
}
