// src/logging.rs

//! Logging setup for `pdialog` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `PDIALOG_LOG` environment variable: a bare level ("info", "debug")
//!    or a full `EnvFilter` directive list
//! 3. default to `info`
//!
//! A bare level applies to this crate only; everything else (tokio,
//! dependencies) stays at `warn`. Logs go to stderr so that stdout carries
//! only dialog results.

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "PDIALOG_LOG";

/// Target of every event emitted by this crate.
const CRATE_TARGET: &str = "portable_dialogs";

const DEFAULT_LEVEL: Level = Level::INFO;

/// Initialise global logging subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => crate_filter(level_from_log_level(lvl)),
        None => match std::env::var(LOG_ENV_VAR) {
            Ok(spec) => filter_from_env(&spec),
            Err(_) => crate_filter(DEFAULT_LEVEL),
        },
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))?;

    Ok(())
}

/// `level` for this crate, `warn` for everything else.
fn crate_filter(level: Level) -> EnvFilter {
    EnvFilter::new(format!(
        "warn,{CRATE_TARGET}={}",
        level.as_str().to_ascii_lowercase()
    ))
}

fn filter_from_env(spec: &str) -> EnvFilter {
    if let Some(level) = parse_level_str(spec) {
        return crate_filter(level);
    }
    EnvFilter::try_new(spec.trim()).unwrap_or_else(|err| {
        eprintln!("pdialog: ignoring invalid {LOG_ENV_VAR}={spec:?}: {err}");
        crate_filter(DEFAULT_LEVEL)
    })
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_env_levels_case_insensitively() {
        assert_eq!(parse_level_str(" DEBUG "), Some(Level::DEBUG));
        assert_eq!(parse_level_str("warning"), Some(Level::WARN));
        assert_eq!(parse_level_str("loud"), None);
    }

    #[test]
    fn bare_level_is_scoped_to_this_crate() {
        let filter = crate_filter(Level::DEBUG).to_string();
        assert!(filter.contains("portable_dialogs=debug"), "{filter}");
        assert!(filter.contains("warn"), "{filter}");

        let from_env = filter_from_env("trace").to_string();
        assert!(from_env.contains("portable_dialogs=trace"), "{from_env}");
    }

    #[test]
    fn env_directives_are_used_verbatim() {
        let filter = filter_from_env("tokio=debug,portable_dialogs::exec=trace").to_string();
        assert!(filter.contains("tokio=debug"), "{filter}");
        assert!(filter.contains("portable_dialogs::exec=trace"), "{filter}");
    }
}
