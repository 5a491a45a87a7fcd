//! Opt-in log output for schema derivation.
//!
//! navro only emits `tracing` spans and events. Nothing is printed until a
//! subscriber is installed, either by the host application or through
//! [`init_tracing`].

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "NAVRO_LOG";
const DEFAULT_DIRECTIVE: &str = "navro=debug";

static INSTALLED: Mutex<bool> = Mutex::new(false);

#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("`{directive}` is not a valid log filter: {source}")]
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("another tracing subscriber is already installed: {0}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install a compact subscriber for navro's `navro.derive` and
/// `navro.generate` spans.
///
/// The filter is read from `NAVRO_LOG`, then `RUST_LOG`, and falls back to
/// `navro=debug`. Use `navro=trace` to see every record the walker
/// registers.
pub fn init_tracing() -> Result<(), TelemetryInitError> {
    let directive = directive_from_env();
    init_tracing_with(directive.as_deref().unwrap_or(DEFAULT_DIRECTIVE))
}

/// [`init_tracing`] with an explicit filter directive.
///
/// Only the first successful call installs anything; later calls, including
/// concurrent ones, just validate `directive`.
pub fn init_tracing_with(directive: &str) -> Result<(), TelemetryInitError> {
    let filter =
        EnvFilter::try_new(directive).map_err(|source| TelemetryInitError::InvalidFilter {
            directive: directive.to_string(),
            source,
        })?;

    let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
    if *installed {
        return Ok(());
    }

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_thread_names(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    *installed = true;
    Ok(())
}

fn directive_from_env() -> Option<String> {
    [LOG_ENV, "RUST_LOG"].into_iter().find_map(|key| {
        std::env::var(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
    })
}
