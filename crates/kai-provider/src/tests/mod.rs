//! Unit tests for the provider contracts.
