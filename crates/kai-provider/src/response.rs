//! Payloads exchanged with a live provider session.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Zero-based position inside a file.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Position {
    /// Line number.
    pub line: u32,
    /// Character offset within the line.
    pub character: u32,
}

/// Span of code an incident points at.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// First position covered.
    pub start_position: Position,
    /// Position just past the end.
    pub end_position: Position,
}

/// One place in the target that satisfied a condition.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncidentContext {
    /// File containing the incident.
    pub file_uri: String,
    /// One-based line number, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    /// Provider-defined variables for message templating.
    #[serde(default)]
    pub variables: BTreeMap<String, Value>,
    /// Exact code span, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_location: Option<Location>,
}

/// Answer to a single capability evaluation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    /// Whether the condition matched anywhere.
    pub matched: bool,
    /// Every incident found.
    #[serde(default)]
    pub incidents: Vec<IncidentContext>,
    /// Values shared by all incidents for message templating.
    #[serde(default)]
    pub template_context: BTreeMap<String, Value>,
}

/// A resolved dependency of the analysed project.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Dependency name, e.g. `org.slf4j.slf4j-api`.
    pub name: String,
    /// Resolved version string.
    #[serde(default)]
    pub version: String,
    /// Artifact classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Artifact type, e.g. `jar`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Labels attached during resolution, such as open-source markers.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Prefix of the file URIs belonging to this dependency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_uri_prefix: Option<String>,
    /// Provider-specific extras.
    #[serde(default)]
    pub extras: BTreeMap<String, Value>,
}

/// A dependency together with the dependencies it pulled in.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DependencyDagItem {
    /// The dependency itself.
    pub dependency: Dependency,
    /// Transitive dependencies it introduced.
    #[serde(default)]
    pub added_deps: Vec<DependencyDagItem>,
}

/// Flat dependencies keyed by the build file that declared them.
pub type DependencyMap = BTreeMap<String, Vec<Dependency>>;

/// Dependency trees keyed by the build file that declared them.
pub type DependencyDagMap = BTreeMap<String, Vec<DependencyDagItem>>;

/// Edit to a file in the analysed location.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FileChange {
    /// Path of the changed file.
    pub path: PathBuf,
    /// New in-memory content.
    pub content: String,
    /// Whether the content has been written to disk.
    pub saved: bool,
}
