//! Seam to the external Java provider implementation.

use std::sync::Arc;

use kai_provider::BaseClient;
use tracing::Span;

/// Instantiates the external Java provider.
///
/// Implementations wrap whatever constructor the real provider exposes. The
/// returned instance must not start any session yet; the adapter calls
/// [`BaseClient::init`] on it exactly once.
pub trait JavaProviderFactory {
    /// Creates a provider registered under `name` that attaches
    /// `context_lines` lines of surrounding code to each incident.
    ///
    /// `context_lines` is passed through unchecked.
    fn create(&self, span: &Span, name: &str, context_lines: usize) -> Arc<dyn BaseClient>;
}
