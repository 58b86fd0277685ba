//! Layered settings for the Java analysis provider.
//!
//! [`ProviderSettings`] resolves values from command-line flags, `KAI_`
//! environment variables, a TOML configuration file, and built-in defaults,
//! in that order of precedence. Hosts that embed the provider directly can
//! skip this crate and build provider options by hand; the provider never
//! reads configuration on its own.

mod defaults;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use defaults::{
    DEFAULT_CONTEXT_LINES, DEFAULT_LOG_FILTER, default_context_lines, default_log_filter,
    default_log_format,
};

/// How the provider writes its log lines to stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event, carrying the caller's span so a host can
    /// attribute lines to the analysis that started the provider.
    #[default]
    Json,
    /// Single-line text for running the provider from a terminal.
    Compact,
}

/// Raised when `--log-format` or `KAI_LOG_FORMAT` names no known format.
pub type LogFormatParseError = strum::ParseError;

/// Settings consumed when constructing the Java provider.
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "KAI")]
pub struct ProviderSettings {
    /// Lines of surrounding code captured for each incident.
    pub context_lines: Option<usize>,
    /// Directory holding the project to analyse.
    pub location: Utf8PathBuf,
    /// Path to the Java language server launcher.
    pub lsp_server_path: Utf8PathBuf,
    /// Locator for the analyzer bundle loaded into the language server.
    pub bundles: String,
    /// File listing dependency name patterns labelled as open source.
    pub dep_open_source_labels_file: Option<String>,
    /// Tracing filter expression, e.g. `info` or `kai_java_provider=debug`.
    pub log_filter: Option<String>,
    /// Output format for log lines.
    pub log_format: Option<LogFormat>,
}

impl ProviderSettings {
    /// Lines of context, falling back to [`DEFAULT_CONTEXT_LINES`].
    #[must_use]
    pub fn context_lines(&self) -> usize {
        self.context_lines.unwrap_or(DEFAULT_CONTEXT_LINES)
    }

    /// Directory holding the project to analyse.
    #[must_use]
    pub fn location(&self) -> &Utf8Path {
        self.location.as_path()
    }

    /// Path to the language server launcher.
    #[must_use]
    pub fn lsp_server_path(&self) -> &Utf8Path {
        self.lsp_server_path.as_path()
    }

    /// Bundle locator.
    #[must_use]
    pub fn bundles(&self) -> &str {
        self.bundles.as_str()
    }

    /// Open-source label file. An empty value reads as unset; any other
    /// value, whitespace included, is returned untouched.
    #[must_use]
    pub fn dep_open_source_labels_file(&self) -> Option<&str> {
        self.dep_open_source_labels_file
            .as_deref()
            .filter(|path| !path.is_empty())
    }

    /// Log filter, falling back to [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Log format, falling back to [`default_log_format`].
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_else(default_log_format)
    }
}
