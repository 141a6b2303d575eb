//! Process-level entry point for test binaries.
//!
//! Installs logging, loads configuration, registers the suite and runs it.
//! A registration error is fatal: it is reported, nothing runs, no summary
//! is printed, and the process exits with [`QuitCode::JsError`].

use std::process::ExitCode;

use assay_core::{
    HarnessError, Host, QuitCode, RegistrationError, RunnerConfig, StdoutHost, Suite,
};
use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter; an unparseable filter falls
/// back to `warn`. Does nothing if a global subscriber is already set.
pub fn init_tracing(config: &RunnerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs a suite against stdout using configuration from `ASSAY_CONFIG`.
pub fn launch<F>(register: F) -> ExitCode
where
    F: FnOnce(&mut Suite) -> Result<(), RegistrationError>,
{
    let config = match RunnerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&RunnerConfig::default());
            tracing::error!(error = %e, "failed to load configuration");
            StdoutHost::new().print(&e.to_string());
            return e.quit_code().into();
        }
    };
    init_tracing(&config);
    launch_with(config, &mut StdoutHost::new(), register).into()
}

/// Registers and runs a suite against `host`, returning the exit code.
///
/// Exits `Ok` after a normal run whatever the failure count, unless
/// `fail_on_error` is set.
pub fn launch_with<F>(config: RunnerConfig, host: &mut dyn Host, register: F) -> QuitCode
where
    F: FnOnce(&mut Suite) -> Result<(), RegistrationError>,
{
    let fail_on_error = config.fail_on_error;
    let mut suite = Suite::with_config(config);

    if let Err(e) = register(&mut suite) {
        tracing::error!(error = %e, "fatal registration error");
        host.print(&e.to_string());
        return HarnessError::from(e).quit_code();
    }

    let report = suite.run_all_tests(host);
    if fail_on_error && !report.summary.all_passed() {
        QuitCode::Error
    } else {
        QuitCode::Ok
    }
}
