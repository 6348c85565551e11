//! Tracing setup for the command-line front end.

use std::env;

use clap::Args;
use tracing::Level;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn get_env() -> String {
    env::var("RUST_LOG").unwrap_or_default()
}

fn get_levels(bin: &str, level: Option<Level>) -> String {
    match level {
        Some(level) => {
            let level = level.to_string().to_lowercase();
            let env = get_env();
            if env.is_empty() {
                format!("{bin}={level}")
            } else {
                format!("{bin}={level},{env}")
            }
        }
        None => get_env(),
    }
}

/// Installs a compact stderr subscriber for `bin` at `level`.
///
/// `RUST_LOG` directives are appended, so they can widen or narrow the
/// selection. Without a level and without `RUST_LOG` nothing is logged.
///
/// # Panic
///
/// This will panic if the filter directives are malformed or a global
/// subscriber is already installed.
pub(crate) fn logger(bin: &str, level: Option<Level>) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse(get_levels(bin, level))
        .expect("failed to configure tracing/logging");

    let formatter = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}

/// Log level flags shared by every subcommand.
#[derive(Debug, Default, Args)]
pub(crate) struct LogConfig {
    /// Enable debug + info + warning + error logging
    #[arg(long, global = true)]
    debug: bool,

    /// Enable info + warning + error logging
    #[arg(long, global = true)]
    info: bool,

    /// Enable warning + error logging
    #[arg(long, global = true)]
    warn: bool,

    /// Enable error logging
    #[arg(long, global = true)]
    error: bool,
}

impl LogConfig {
    pub(crate) fn level(&self) -> Option<Level> {
        if self.debug {
            Some(Level::DEBUG)
        } else if self.info {
            Some(Level::INFO)
        } else if self.warn {
            Some(Level::WARN)
        } else if self.error {
            Some(Level::ERROR)
        } else {
            None
        }
    }
}
