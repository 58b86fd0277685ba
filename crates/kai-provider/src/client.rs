//! Capability traits every provider exposes to the host.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Span;

use crate::config::InitConfig;
use crate::context::ProviderContext;
use crate::error::ProviderError;
use crate::response::{DependencyDagMap, DependencyMap, EvaluateResponse, FileChange};

/// Named condition a provider knows how to evaluate.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    /// Capability name used in rule conditions, e.g. `referenced`.
    pub name: String,
    /// JSON schema for the condition payload, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
}

impl Capability {
    /// Builds a capability without an input schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_schema: None,
        }
    }
}

/// Session started by [`BaseClient::init`].
pub struct ProviderSession {
    /// Handle answering queries for the initialised location.
    pub service: Box<dyn ServiceClient>,
    /// Configuration as the provider ended up applying it.
    pub config: InitConfig,
}

impl fmt::Debug for ProviderSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ProviderSession")
            .field("service", &self.service)
            .field("config", &self.config)
            .finish()
    }
}

/// Lifecycle surface of a provider.
///
/// The `span` argument is the caller's logging scope. Implementations record
/// their diagnostics inside it rather than opening an unrelated root span.
pub trait BaseClient: Send + Sync {
    /// Capabilities the provider can evaluate.
    fn capabilities(&self) -> Vec<Capability>;

    /// Starts a session against `config.location`.
    ///
    /// This may launch processes or open connections and can block for a
    /// while. Honouring `ctx` cancellation is up to the implementation.
    fn init(
        &self,
        ctx: &ProviderContext,
        span: &Span,
        config: InitConfig,
    ) -> Result<ProviderSession, ProviderError>;
}

/// Query surface of one initialised provider session.
pub trait ServiceClient: Send + Sync {
    /// Evaluates `capability` with a serialised condition payload.
    fn evaluate(
        &self,
        ctx: &ProviderContext,
        capability: &str,
        condition: &[u8],
    ) -> Result<EvaluateResponse, ProviderError>;

    /// Informs the session about in-memory edits.
    fn notify_file_changes(
        &self,
        ctx: &ProviderContext,
        changes: &[FileChange],
    ) -> Result<(), ProviderError>;

    /// Resolved dependencies, flattened.
    fn dependencies(&self, ctx: &ProviderContext) -> Result<DependencyMap, ProviderError>;

    /// Resolved dependencies as trees.
    fn dependencies_dag(&self, ctx: &ProviderContext) -> Result<DependencyDagMap, ProviderError>;

    /// Tears down the session.
    fn stop(&self);
}

/// Provider linked into the host process rather than reached over RPC.
///
/// The host calls [`provider_init`](Self::provider_init) after construction
/// so the provider can rewrite its target list before the host commits to it.
pub trait InternalProviderClient: BaseClient + ServiceClient {
    /// Inspects and possibly rewrites the per-target configurations.
    fn provider_init(
        &self,
        ctx: &ProviderContext,
        configs: Vec<InitConfig>,
    ) -> Result<Vec<InitConfig>, ProviderError>;
}

impl fmt::Debug for dyn BaseClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("BaseClient")
    }
}

impl fmt::Debug for dyn ServiceClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ServiceClient")
    }
}

impl fmt::Debug for dyn InternalProviderClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("InternalProviderClient")
    }
}
