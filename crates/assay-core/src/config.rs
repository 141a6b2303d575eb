//! Runner configuration.
//!
//! Configuration is validated at load time, with defaults that reproduce
//! the stock shell behaviour: verbose diagnostics, contained panics and a
//! zero exit status regardless of test failures.

use std::ffi::OsString;

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV: &str = "ASSAY_CONFIG";

/// Runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Print assertion diagnostics at the point of failure.
    #[serde(default = "default_true")]
    pub verbose: bool,

    /// Contain panics raised by test bodies instead of aborting the run.
    #[serde(default = "default_true")]
    pub catch_panics: bool,

    /// Exit with a non-zero status when any test failed.
    #[serde(default)]
    pub fail_on_error: bool,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

const fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            catch_panics: true,
            fail_on_error: false,
            log_filter: default_log_filter(),
        }
    }
}

impl RunnerConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(HarnessError::config("log_filter cannot be empty"));
        }
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text cannot be parsed or is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| HarnessError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| HarnessError::config(format!("failed to read config: {e}")))?;
        Self::from_toml_str(&content)
    }

    /// Loads the file named by [`CONFIG_ENV`], or returns defaults when unset.
    ///
    /// # Errors
    /// Returns an error if the named file cannot be loaded.
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var_os(CONFIG_ENV))
    }

    fn from_var(path: Option<OsString>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = ?path, "loading runner config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
