//! Recording Java provider used in tests.

use std::sync::{Arc, Mutex};

use kai_provider::{
    BaseClient, Capability, DependencyDagMap, DependencyMap, EvaluateResponse, FileChange,
    InitConfig, ProviderContext, ProviderError, ProviderOperation, ProviderSession, ServiceClient,
};
use tracing::{Span, info, span};

use crate::factory::JavaProviderFactory;

/// Message the recording provider logs, inside the span it was given, when
/// `init` starts.
pub const RECORDING_INIT_MESSAGE: &str = "recording provider init";

/// Discriminates the kind of call recorded by the stub provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// The factory created the provider.
    Create,
    /// `capabilities` was invoked on the provider.
    Capabilities,
    /// `init` was invoked on the provider.
    Init,
    /// `evaluate` reached the session.
    Evaluate,
    /// `notify_file_changes` reached the session.
    NotifyFileChanges,
    /// `dependencies` reached the session.
    Dependencies,
    /// `dependencies_dag` reached the session.
    DependenciesDag,
    /// `stop` reached the session.
    Stop,
}

/// Factory handing out a recording provider.
#[derive(Clone)]
pub struct RecordingFactory {
    shared: Arc<Mutex<RecordingState>>,
}

impl RecordingFactory {
    /// Creates a factory whose provider starts sessions successfully.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(RecordingState::new(None))),
        }
    }

    /// Creates a factory whose provider fails during `init`.
    pub fn failing_init(message: impl Into<String>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(RecordingState::new(Some(message.into())))),
        }
    }

    /// Returns a handle that can be used to assert recorded calls.
    pub fn handle(&self) -> RecordingHandle {
        RecordingHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl JavaProviderFactory for RecordingFactory {
    fn create(&self, span: &Span, name: &str, context_lines: usize) -> Arc<dyn BaseClient> {
        with_state(&self.shared, |state| {
            state.record_call(CallKind::Create);
            state.created.push((name.to_owned(), context_lines));
            state.create_spans.push(span.id());
        });
        Arc::new(RecordingProvider {
            shared: Arc::clone(&self.shared),
        })
    }
}

/// Provider double that records `init` arguments.
struct RecordingProvider {
    shared: Arc<Mutex<RecordingState>>,
}

impl BaseClient for RecordingProvider {
    fn capabilities(&self) -> Vec<Capability> {
        with_state(&self.shared, |state| {
            state.record_call(CallKind::Capabilities);
        });
        vec![Capability::new("referenced"), Capability::new("dependency")]
    }

    fn init(
        &self,
        ctx: &ProviderContext,
        span: &Span,
        config: InitConfig,
    ) -> Result<ProviderSession, ProviderError> {
        span.in_scope(|| info!("{RECORDING_INIT_MESSAGE}"));
        with_state(&self.shared, |state| {
            state.record_call(CallKind::Init);
            state.init_contexts.push(ctx.clone());
            state.init_configs.push(config.clone());
            state.init_spans.push(span.id());
            ctx.check(ProviderOperation::Init)?;
            if let Some(message) = &state.fail_init {
                return Err(ProviderError::new(message.clone()));
            }
            Ok(ProviderSession {
                service: Box::new(RecordingSession {
                    shared: Arc::clone(&self.shared),
                }),
                config,
            })
        })
    }
}

/// Session double returned from a successful `init`.
struct RecordingSession {
    shared: Arc<Mutex<RecordingState>>,
}

impl RecordingSession {
    fn record(&self, kind: CallKind) {
        with_state(&self.shared, |state| state.record_call(kind));
    }
}

impl ServiceClient for RecordingSession {
    fn evaluate(
        &self,
        _ctx: &ProviderContext,
        _capability: &str,
        _condition: &[u8],
    ) -> Result<EvaluateResponse, ProviderError> {
        self.record(CallKind::Evaluate);
        Ok(EvaluateResponse {
            matched: true,
            ..EvaluateResponse::default()
        })
    }

    fn notify_file_changes(
        &self,
        _ctx: &ProviderContext,
        _changes: &[FileChange],
    ) -> Result<(), ProviderError> {
        self.record(CallKind::NotifyFileChanges);
        Ok(())
    }

    fn dependencies(&self, _ctx: &ProviderContext) -> Result<DependencyMap, ProviderError> {
        self.record(CallKind::Dependencies);
        Ok(DependencyMap::new())
    }

    fn dependencies_dag(&self, _ctx: &ProviderContext) -> Result<DependencyDagMap, ProviderError> {
        self.record(CallKind::DependenciesDag);
        Ok(DependencyDagMap::new())
    }

    fn stop(&self) {
        self.record(CallKind::Stop);
    }
}

/// Handle that exposes recorded state for assertions.
#[derive(Clone)]
pub struct RecordingHandle {
    shared: Arc<Mutex<RecordingState>>,
}

impl RecordingHandle {
    /// Returns the ordered list of calls observed.
    pub fn calls(&self) -> Vec<CallKind> {
        with_state(&self.shared, |state| state.calls.clone())
    }

    /// Returns every `(name, context_lines)` pair passed to the factory.
    pub fn created(&self) -> Vec<(String, usize)> {
        with_state(&self.shared, |state| state.created.clone())
    }

    /// Returns every configuration passed to `init`.
    pub fn init_configs(&self) -> Vec<InitConfig> {
        with_state(&self.shared, |state| state.init_configs.clone())
    }

    /// Returns every context passed to `init`.
    pub fn init_contexts(&self) -> Vec<ProviderContext> {
        with_state(&self.shared, |state| state.init_contexts.clone())
    }

    /// Returns the span id seen by each factory call.
    pub fn create_spans(&self) -> Vec<Option<span::Id>> {
        with_state(&self.shared, |state| state.create_spans.clone())
    }

    /// Returns the span id seen by each `init` call.
    pub fn init_spans(&self) -> Vec<Option<span::Id>> {
        with_state(&self.shared, |state| state.init_spans.clone())
    }

    /// Returns the single configuration passed to `init`.
    pub fn only_init_config(&self) -> InitConfig {
        let configs = self.init_configs();
        match configs.as_slice() {
            [config] => config.clone(),
            other => panic!("expected exactly one init call, got {}", other.len()),
        }
    }
}

fn with_state<R, F>(shared: &Arc<Mutex<RecordingState>>, action: F) -> R
where
    F: FnOnce(&mut RecordingState) -> R,
{
    let mut guard = shared.lock().unwrap_or_else(|poison| poison.into_inner());
    action(&mut guard)
}

#[derive(Debug)]
struct RecordingState {
    calls: Vec<CallKind>,
    created: Vec<(String, usize)>,
    init_configs: Vec<InitConfig>,
    init_contexts: Vec<ProviderContext>,
    create_spans: Vec<Option<span::Id>>,
    init_spans: Vec<Option<span::Id>>,
    fail_init: Option<String>,
}

impl RecordingState {
    fn new(fail_init: Option<String>) -> Self {
        Self {
            calls: Vec::new(),
            created: Vec::new(),
            init_configs: Vec::new(),
            init_contexts: Vec::new(),
            create_spans: Vec::new(),
            init_spans: Vec::new(),
            fail_init,
        }
    }

    fn record_call(&mut self, kind: CallKind) {
        self.calls.push(kind);
    }
}
