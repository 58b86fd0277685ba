//! Log output for hosts running the Java provider adapter.
//!
//! Construction diagnostics are emitted inside the caller's span. The JSON
//! format keeps that span and its parents on every line, so a host starting
//! several providers at once can tell their start-up logs apart.

use std::io::{self, IsTerminal};

use kai_config::{LogFormat, ProviderSettings};
use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

static INSTALLED: OnceCell<TelemetryHandle> = OnceCell::new();

/// Format and filter the global subscriber was installed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryHandle {
    format: LogFormat,
    filter: String,
}

impl TelemetryHandle {
    /// Output format in effect.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }

    /// Filter expression in effect.
    #[must_use]
    pub fn filter(&self) -> &str {
        self.filter.as_str()
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured log filter expression does not parse.
    #[error("invalid log filter '{expression}': {message}")]
    Filter {
        /// Expression taken from the settings.
        expression: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Another subscriber already owns the global default.
    #[error("failed to install provider telemetry: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Installs the global subscriber described by `settings` on first use.
///
/// Later calls return the handle from the first installation, whatever
/// settings they pass.
///
/// # Errors
///
/// Fails when the filter expression does not parse or another subscriber is
/// already installed globally.
pub fn initialise(settings: &ProviderSettings) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED
        .get_or_try_init(|| {
            let handle = TelemetryHandle {
                format: settings.log_format(),
                filter: settings.log_filter().to_owned(),
            };
            install_subscriber(&handle)?;
            Ok(handle)
        })
        .cloned()
}

/// Parses a log filter expression taken from provider settings.
pub(crate) fn provider_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|error| TelemetryError::Filter {
        expression: expression.to_owned(),
        message: error.to_string(),
    })
}

fn install_subscriber(handle: &TelemetryHandle) -> Result<(), TelemetryError> {
    let env_filter = provider_filter(handle.filter())?;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let subscriber: Box<dyn Subscriber + Send + Sync> = match handle.format() {
        LogFormat::Json => Box::new(
            builder
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(true)
                .finish(),
        ),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
