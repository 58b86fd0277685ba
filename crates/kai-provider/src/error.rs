//! Error type surfaced by provider implementations.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use thiserror::Error;

/// Provider call that was running when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderOperation {
    /// Session start-up through `init`.
    Init,
    /// Capability evaluation.
    Evaluate,
    /// File change notification.
    NotifyFileChanges,
    /// Flat dependency listing.
    Dependencies,
    /// Dependency tree listing.
    DependenciesDag,
}

impl fmt::Display for ProviderOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Init => "init",
            Self::Evaluate => "evaluate",
            Self::NotifyFileChanges => "notify file changes",
            Self::Dependencies => "dependencies",
            Self::DependenciesDag => "dependency dag",
        };
        formatter.write_str(label)
    }
}

/// Errors reported by providers and their sessions.
///
/// Adapters sitting between a provider and the host pass these through
/// untouched, so the message always originates from the provider that failed.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The call's context was cancelled or its deadline passed.
    #[error("provider {operation} was cancelled")]
    Cancelled {
        /// Call that observed the cancellation.
        operation: ProviderOperation,
    },

    /// The provider reported a failure of its own.
    #[error("{message}")]
    Failed {
        /// Provider-supplied description.
        message: String,
        /// Underlying cause, when the provider kept one.
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },
}

impl ProviderError {
    /// Builds a provider failure without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            source: None,
        }
    }

    /// Builds a provider failure that wraps an underlying source.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self::Failed {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Builds the error a provider returns when it notices cancellation.
    #[must_use]
    pub const fn cancelled(operation: ProviderOperation) -> Self {
        Self::Cancelled { operation }
    }

    /// Whether the provider stopped because its context was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Description without the optional source.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Failed { message, .. } => Cow::Borrowed(message.as_str()),
            Self::Cancelled { .. } => Cow::Owned(self.to_string()),
        }
    }
}
