//! Java analysis provider adapter.
//!
//! The Java provider proper (language server client, bundle loading,
//! dependency label resolution) lives outside this crate and is reached only
//! through a [`JavaProviderFactory`]. The adapter configures it for
//! source-only analysis of one location, starts a single session, and
//! republishes the pair as a [`JavaProviderClient`] that the host can drive
//! through the [`kai_provider::BaseClient`], [`kai_provider::ServiceClient`]
//! and [`kai_provider::InternalProviderClient`] traits.
//!
//! # Example
//!
//! ```ignore
//! use kai_java_provider::{JavaProviderClient, JavaProviderOptions};
//! use kai_provider::ProviderContext;
//!
//! let options = JavaProviderOptions::new("/repo", "/usr/bin/jdtls", "/bundles/rules.jar")
//!     .with_context_lines(5);
//! let span = tracing::info_span!("java_provider");
//! let client = JavaProviderClient::new(&ProviderContext::background(), &span, &factory, &options)?;
//! ```

mod client;
mod factory;
mod options;
pub mod telemetry;


pub use client::JavaProviderClient;
pub use factory::JavaProviderFactory;
pub use options::{
    BUNDLES_KEY, DEP_OPEN_SOURCE_LABELS_FILE_KEY, JAVA_PROVIDER_NAME, JavaProviderOptions,
    LSP_SERVER_NAME_KEY, LSP_SERVER_PATH_KEY,
};
