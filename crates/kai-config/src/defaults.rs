/// Lines of surrounding code attached to each incident by default.
pub const DEFAULT_CONTEXT_LINES: usize = 10;

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default number of context lines.
#[must_use]
pub const fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}

/// Default log filter expression.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format.
#[must_use]
pub const fn default_log_format() -> crate::LogFormat {
    crate::LogFormat::Json
}
