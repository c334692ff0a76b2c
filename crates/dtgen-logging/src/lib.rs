//! ---
//! dtgen_section: "02-logging"
//! dtgen_subsection: "module"
//! dtgen_type: "source"
//! dtgen_scope: "code"
//! dtgen_description: "Structured logging setup for the command-line tools."
//! dtgen_version: "v0.1.0"
//! dtgen_owner: "tbd"
//! ---
//! Logging bootstrap shared by dtgen binaries.
#![warn(missing_docs)]

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

/// Environment variable taking precedence over `RUST_LOG`.
pub const LOG_ENV: &str = "DTGEN_LOG";

/// Baseline verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only.
    Quiet,
    /// Informational messages.
    #[default]
    Normal,
    /// Debug diagnostics.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Map a `-q` flag and a count of `-v` flags to a verbosity.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }

    /// Default filter level for this verbosity.
    pub fn level(self) -> Level {
        match self {
            Verbosity::Quiet => Level::WARN,
            Verbosity::Normal => Level::INFO,
            Verbosity::Verbose => Level::DEBUG,
            Verbosity::Trace => Level::TRACE,
        }
    }
}

/// Resolve the active filter: `DTGEN_LOG`, then `RUST_LOG`, then `verbosity`.
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    let fallback = || EnvFilter::new(verbosity.level().as_str().to_ascii_lowercase());
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!("invalid {LOG_ENV} directive ({err}); using default filter");
            fallback()
        }),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
    }
}

/// Install a stderr subscriber. Repeated calls are ignored.
pub fn init(verbosity: Verbosity) {
    let _ = Registry::default()
        .with(build_filter(verbosity))
        .with(
            subscriber_fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Emit an informational lifecycle event tagged with `event`.
pub fn log_run_event(event: &str, message: &str) {
    tracing::info!(event, message = %message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_verbosity() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
    }

    #[test]
    fn levels_follow_verbosity() {
        assert_eq!(Verbosity::Quiet.level(), Level::WARN);
        assert_eq!(Verbosity::default().level(), Level::INFO);
        assert_eq!(Verbosity::Trace.level(), Level::TRACE);
    }

    #[test]
    fn init_does_not_panic() {
        init(Verbosity::Normal);
        init(Verbosity::Verbose);
    }

    #[test]
    fn run_event_helper_emits() {
        init(Verbosity::Normal);
        log_run_event("test.event", "run event helper executed");
    }
}
