//! Per-target configuration handed to a provider when a session starts.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

/// How deeply a provider analyses its target.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AnalysisMode {
    /// Source plus resolved dependencies.
    #[default]
    Full,
    /// Source files only; dependencies are never unpacked or decompiled.
    SourceOnly,
}

/// Errors encountered while parsing an [`AnalysisMode`] from text.
pub type AnalysisModeParseError = strum::ParseError;

/// Network proxy settings forwarded to providers that fetch dependencies.
///
/// The default value carries no proxies and is what hosts pass when nothing
/// is configured.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Proxy {
    /// Proxy used for plain HTTP traffic.
    #[serde(rename = "httpproxy", default, skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    /// Proxy used for HTTPS traffic.
    #[serde(rename = "httpsproxy", default, skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    /// Comma-separated hosts that bypass the proxy.
    #[serde(rename = "noproxy", default, skip_serializing_if = "Option::is_none")]
    pub no_proxy: Option<String>,
}

impl Proxy {
    /// Whether no proxy setting is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.http_proxy.is_none() && self.https_proxy.is_none() && self.no_proxy.is_none()
    }
}

/// Provider-specific options keyed by name.
///
/// Providers parse this map themselves, and some of them treat a missing key
/// differently from an empty one. Only insert keys that carry a value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProviderSpecificConfig(BTreeMap<String, Value>);

impl ProviderSpecificConfig {
    /// Builds an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value under `key` when it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Whether `key` is present, regardless of its value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the configuration holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for ProviderSpecificConfig
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Configuration used to start one provider session against one location.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InitConfig {
    /// Filesystem location to analyse.
    pub location: PathBuf,
    /// Pre-resolved dependency listing, when the host has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_path: Option<PathBuf>,
    /// Depth of analysis requested from the provider.
    #[serde(default)]
    pub analysis_mode: AnalysisMode,
    /// Options only the receiving provider understands.
    #[serde(default)]
    pub provider_specific_config: ProviderSpecificConfig,
    /// Proxy settings; always present, possibly empty.
    #[serde(default)]
    pub proxy: Proxy,
}

impl InitConfig {
    /// Builds a configuration for `location` with default settings.
    #[must_use]
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// Sets the analysis mode.
    #[must_use]
    pub fn with_analysis_mode(mut self, mode: AnalysisMode) -> Self {
        self.analysis_mode = mode;
        self
    }

    /// Replaces the provider-specific options.
    #[must_use]
    pub fn with_provider_specific_config(mut self, config: ProviderSpecificConfig) -> Self {
        self.provider_specific_config = config;
        self
    }

    /// Replaces the proxy settings.
    #[must_use]
    pub fn with_proxy(mut self, proxy: Proxy) -> Self {
        self.proxy = proxy;
        self
    }
}
