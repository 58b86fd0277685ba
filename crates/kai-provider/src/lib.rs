//! Contracts shared by analysis providers and the host analysis engine.
//!
//! A provider analyses source code for one language or ecosystem. The host
//! discovers providers, hands each one an [`InitConfig`] per target location,
//! and issues queries against the session the provider returns. The crate
//! keeps that exchange behind three traits so hosts can treat every language
//! provider the same way:
//!
//! - [`BaseClient`]: the provider itself, able to start sessions.
//! - [`ServiceClient`]: one live session answering analysis queries.
//! - [`InternalProviderClient`]: the union of both, plus the configuration
//!   finalization hook the host runs after construction.
//!
//! Provider implementations are free to spawn language servers or open
//! network connections; nothing in this crate does either.

mod client;
mod config;
mod context;
mod error;
mod response;

#[cfg(test)]
mod tests;

pub use client::{BaseClient, Capability, InternalProviderClient, ProviderSession, ServiceClient};
pub use config::{AnalysisMode, AnalysisModeParseError, InitConfig, ProviderSpecificConfig, Proxy};
pub use context::ProviderContext;
pub use error::{ProviderError, ProviderOperation};
pub use response::{
    Dependency, DependencyDagItem, DependencyDagMap, DependencyMap, EvaluateResponse, FileChange,
    IncidentContext, Location, Position,
};
