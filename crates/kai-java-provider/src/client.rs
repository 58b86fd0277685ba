//! Combined lifecycle and session client for the Java provider.

use std::fmt;
use std::sync::Arc;

use kai_config::ProviderSettings;
use kai_provider::{
    BaseClient, Capability, DependencyDagMap, DependencyMap, EvaluateResponse, FileChange,
    InitConfig, InternalProviderClient, ProviderContext, ProviderError, ProviderSession,
    ServiceClient,
};
use tracing::{Span, debug, info};

use crate::factory::JavaProviderFactory;
use crate::options::{JAVA_PROVIDER_NAME, JavaProviderOptions};

const CLIENT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::client");

/// Java provider paired with the session it started.
///
/// Lifecycle calls go to the provider instance, query calls go to the
/// session. Both halves always come from the same construction call.
pub struct JavaProviderClient {
    base: Arc<dyn BaseClient>,
    service: Box<dyn ServiceClient>,
}

impl fmt::Debug for JavaProviderClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("JavaProviderClient")
            .field("base", &self.base)
            .field("service", &self.service)
            .finish()
    }
}

impl JavaProviderClient {
    /// Creates the Java provider and starts a source-only session.
    ///
    /// `ctx` and `span` are handed to the provider unchanged. The provider's
    /// `init` runs exactly once and blocks until the session is up.
    ///
    /// # Errors
    ///
    /// Returns the provider's `init` error as-is.
    pub fn new(
        ctx: &ProviderContext,
        span: &Span,
        factory: &dyn JavaProviderFactory,
        options: &JavaProviderOptions,
    ) -> Result<Self, ProviderError> {
        let base = factory.create(span, JAVA_PROVIDER_NAME, options.context_lines);
        let config = options.init_config();

        span.in_scope(|| {
            info!(
                target: CLIENT_TARGET,
                lsp_server_path = %options.lsp_server_path,
                "starting java provider"
            );
            debug!(
                target: CLIENT_TARGET,
                provider_specific_config = ?config.provider_specific_config,
                "provider specific config"
            );
            info!(
                target: CLIENT_TARGET,
                location = %config.location.display(),
                analysis_mode = %config.analysis_mode,
                "initialising java provider session"
            );
        });

        let ProviderSession { service, .. } = base.init(ctx, span, config)?;
        Ok(Self { base, service })
    }

    /// Same as [`new`](Self::new) with options taken from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns the provider's `init` error as-is.
    pub fn from_settings(
        ctx: &ProviderContext,
        span: &Span,
        factory: &dyn JavaProviderFactory,
        settings: &ProviderSettings,
    ) -> Result<Self, ProviderError> {
        Self::new(ctx, span, factory, &JavaProviderOptions::from_settings(settings))
    }
}

impl BaseClient for JavaProviderClient {
    fn capabilities(&self) -> Vec<Capability> {
        self.base.capabilities()
    }

    fn init(
        &self,
        ctx: &ProviderContext,
        span: &Span,
        config: InitConfig,
    ) -> Result<ProviderSession, ProviderError> {
        self.base.init(ctx, span, config)
    }
}

impl ServiceClient for JavaProviderClient {
    fn evaluate(
        &self,
        ctx: &ProviderContext,
        capability: &str,
        condition: &[u8],
    ) -> Result<EvaluateResponse, ProviderError> {
        self.service.evaluate(ctx, capability, condition)
    }

    fn notify_file_changes(
        &self,
        ctx: &ProviderContext,
        changes: &[FileChange],
    ) -> Result<(), ProviderError> {
        self.service.notify_file_changes(ctx, changes)
    }

    fn dependencies(&self, ctx: &ProviderContext) -> Result<DependencyMap, ProviderError> {
        self.service.dependencies(ctx)
    }

    fn dependencies_dag(&self, ctx: &ProviderContext) -> Result<DependencyDagMap, ProviderError> {
        self.service.dependencies_dag(ctx)
    }

    fn stop(&self) {
        self.service.stop();
    }
}

impl InternalProviderClient for JavaProviderClient {
    /// Returns `configs` unchanged.
    ///
    /// Every decision for this provider is made at construction time, so
    /// there is nothing to adjust per target.
    fn provider_init(
        &self,
        _ctx: &ProviderContext,
        configs: Vec<InitConfig>,
    ) -> Result<Vec<InitConfig>, ProviderError> {
        Ok(configs)
    }
}
