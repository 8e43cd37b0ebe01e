//! Logging setup
//!
//! Logs go to stderr unless `log_file` is configured. The level comes from
//! `SHELF_LOG` when set (any `EnvFilter` directive), otherwise `warn`, or
//! `debug` with `--verbose`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use shelf_core::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive
const LOG_ENV: &str = "SHELF_LOG";

/// Target prefix of events emitted by this binary
const CLI_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Initialize the global subscriber (ignored if already initialized)
pub fn init(config: &Config, verbose: bool) {
    let env_filter = filter(verbose);

    let Some(log_path) = config.log_file.as_ref() else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
        return;
    };

    let log_file = match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init();

    info!("Logging initialized to {:?}", log_path);
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose))
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(default_directive(verbose))
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("shelf_core={},{}={}", level, CLI_TARGET, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_target_matches_module_path() {
        // Events from this binary are tagged with its module path
        assert_eq!(module_path!().split("::").next(), Some(CLI_TARGET));
        assert_eq!(CLI_TARGET, "shelf");
    }

    #[test]
    fn test_default_directive_covers_both_crates() {
        assert_eq!(default_directive(false), "shelf_core=warn,shelf=warn");
        assert_eq!(default_directive(true), "shelf_core=debug,shelf=debug");
    }
}
