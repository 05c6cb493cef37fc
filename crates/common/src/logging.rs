//! Logging and tracing initialization.
//!
//! Logs always go to stderr so that commands can stream machine-readable
//! output on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{DuotrackError, DuotrackResult};

/// Crates whose diagnostics `verbose` turns up to debug.
const DUOTRACK_TARGETS: [&str; 3] = ["duotrack_common", "duotrack_motion_core", "duotrack"];

/// Filter directives for `config`, raising Duotrack targets when verbose.
pub fn filter_directives(config: &LoggingConfig, verbose: bool) -> String {
    let mut directives = config.level.trim().to_string();
    if verbose {
        for target in DUOTRACK_TARGETS {
            if !directives.is_empty() {
                directives.push(',');
            }
            directives.push_str(target);
            directives.push_str("=debug");
        }
    }
    directives
}

/// Install the global subscriber. `RUST_LOG` wins over the configuration.
pub fn try_init_logging(config: &LoggingConfig, verbose: bool) -> DuotrackResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config, verbose)));

    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_target(verbose)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| DuotrackError::Other(anyhow::anyhow!("logging already initialized: {e}")))
}

/// Like [`try_init_logging`], ignoring an already-installed subscriber.
pub fn init_logging(config: &LoggingConfig, verbose: bool) {
    if let Err(e) = try_init_logging(config, verbose) {
        tracing::debug!(error = %e, "keeping existing subscriber");
    }
}
