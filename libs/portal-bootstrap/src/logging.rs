use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::{LogFormat, LoggingConfig};

/// Filter directive derived from config and the `-v` count.
///
/// `-v` info, `-vv` debug, `-vvv` trace; zero keeps the configured level.
/// The flag only raises verbosity: a configured level that is already more
/// verbose than the requested one is kept.
#[must_use]
pub fn filter_directive(config: &LoggingConfig, verbose: u8) -> String {
    let requested = match verbose {
        0 => return config.level.clone(),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    match config.level.trim().parse::<LevelFilter>() {
        Ok(configured) if configured > requested => config.level.clone(),
        _ => requested.to_string(),
    }
}

/// Install the global `tracing` subscriber.
///
/// Output goes to stderr. `RUST_LOG`, when set, replaces the computed filter.
///
/// # Errors
/// Returns an error if the filter does not parse or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => {
            let directive = filter_directive(config, verbose);
            EnvFilter::try_new(&directive)
                .with_context(|| format!("invalid log level directive: {directive}"))?
        }
    };

    let layer = match config.format {
        LogFormat::Text => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_filter(filter)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
