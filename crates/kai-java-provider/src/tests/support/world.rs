//! BDD test world encapsulating the adapter and its recording provider.

use kai_provider::{InitConfig, InternalProviderClient, ProviderContext, ProviderError, ServiceClient};
use tracing::Span;

use crate::client::JavaProviderClient;
use crate::options::JavaProviderOptions;

use super::recording_provider::{CallKind, RecordingFactory, RecordingHandle};
use super::sample_options;

/// Shared state exercised by BDD step implementations.
pub struct TestWorld {
    factory: RecordingFactory,
    /// Options used for the next construction.
    pub options: JavaProviderOptions,
    /// Context handed to the adapter.
    pub ctx: ProviderContext,
    /// Client built by the last successful construction.
    pub client: Option<JavaProviderClient>,
    /// Last error observed while exercising the adapter.
    pub last_error: Option<ProviderError>,
    /// Last output of `provider_init`.
    pub last_finalised: Option<Vec<InitConfig>>,
}

impl TestWorld {
    /// Builds a world around a provider that initialises successfully.
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(RecordingFactory::new())
    }

    /// Builds a world around the supplied factory.
    #[must_use]
    pub fn with_factory(factory: RecordingFactory) -> Self {
        Self {
            factory,
            options: sample_options(),
            ctx: ProviderContext::background(),
            client: None,
            last_error: None,
            last_finalised: None,
        }
    }

    /// Handle onto the recording provider.
    pub fn handle(&self) -> RecordingHandle {
        self.factory.handle()
    }

    /// Recorded call sequence.
    pub fn calls(&self) -> Vec<CallKind> {
        self.handle().calls()
    }

    /// Constructs the adapter and stores the outcome.
    pub fn construct(&mut self) {
        self.client = None;
        self.last_error = None;
        match JavaProviderClient::new(
            &self.ctx,
            &Span::none(),
            &self.factory,
            &self.options,
        ) {
            Ok(client) => self.client = Some(client),
            Err(error) => self.last_error = Some(error),
        }
    }

    /// Runs configuration finalization on the constructed client.
    pub fn finalise(&mut self, configs: Vec<InitConfig>) {
        self.last_finalised = None;
        self.last_error = None;
        match self.client().provider_init(&self.ctx, configs) {
            Ok(finalised) => self.last_finalised = Some(finalised),
            Err(error) => self.last_error = Some(error),
        }
    }

    /// Issues an evaluation and a stop through the constructed client.
    pub fn query_and_stop(&mut self) {
        let client = self.client();
        if let Err(error) = client.evaluate(&self.ctx, "referenced", br#"{"pattern":"*"}"#) {
            panic!("evaluate should succeed: {error}");
        }
        client.stop();
    }

    fn client(&self) -> &JavaProviderClient {
        match self.client.as_ref() {
            Some(client) => client,
            None => panic!("client was not constructed: {:?}", self.last_error),
        }
    }
}
