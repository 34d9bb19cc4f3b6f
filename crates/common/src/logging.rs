//! Tracing setup for the clipmatch binary and tests.
//!
//! A plain level in the config (`"info"`, `"debug"`) applies to clipmatch's
//! own crates while the HTTP stack stays at `warn`. Anything else is read as
//! a full filter directive string. `RUST_LOG` overrides both.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Log targets of the workspace crates and the `clipmatch` binary.
const CLIPMATCH_TARGETS: [&str; 5] = [
    "clipmatch",
    "clipmatch_common",
    "clipmatch_model",
    "clipmatch_core",
    "clipmatch_client",
];

/// Install the global subscriber, writing to stderr.
///
/// Stdout is left to command output. Later calls are no-ops.
pub fn init_logging(config: &LoggingConfig) {
    let configured = config_filter(&config.level);
    let fallback_used = configured.is_none();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        configured.unwrap_or_else(|| EnvFilter::new(default_directives(Level::INFO)))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().with_target(true).try_init().is_ok()
    };

    if installed && fallback_used {
        tracing::warn!(level = %config.level, "Unusable log level in config, using info");
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

/// Filter for a configured level or directive string.
fn config_filter(level: &str) -> Option<EnvFilter> {
    match level.trim().parse::<Level>() {
        Ok(level) => Some(EnvFilter::new(default_directives(level))),
        Err(_) => EnvFilter::try_new(level.trim()).ok(),
    }
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    std::iter::once("warn".to_string())
        .chain(CLIPMATCH_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}
