//! Inputs for constructing the Java provider and the configuration built from them.

use std::path::PathBuf;

use kai_config::{DEFAULT_CONTEXT_LINES, ProviderSettings};
use kai_provider::{AnalysisMode, InitConfig, ProviderSpecificConfig, Proxy};

/// Name the provider registers under and the language server it drives.
pub const JAVA_PROVIDER_NAME: &str = "java";

/// Key naming the language server the provider should talk to.
pub const LSP_SERVER_NAME_KEY: &str = "lspServerName";

/// Key holding the analyzer bundle locator.
pub const BUNDLES_KEY: &str = "bundles";

/// Key holding the language server launcher path.
pub const LSP_SERVER_PATH_KEY: &str = "lspServerPath";

/// Key holding the open-source dependency label file. Only set when known.
pub const DEP_OPEN_SOURCE_LABELS_FILE_KEY: &str = "depOpenSourceLabelsFile";

/// Caller-supplied inputs for [`crate::JavaProviderClient::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaProviderOptions {
    /// Lines of surrounding code attached to each incident.
    pub context_lines: usize,
    /// Directory to analyse.
    pub location: PathBuf,
    /// Language server launcher, passed through as-is.
    pub lsp_server_path: String,
    /// Bundle locator, passed through as-is.
    pub bundles: String,
    /// Open-source dependency label file.
    pub dep_open_source_labels_file: Option<String>,
}

impl JavaProviderOptions {
    /// Builds options with the default context line count and no label file.
    #[must_use]
    pub fn new(
        location: impl Into<PathBuf>,
        lsp_server_path: impl Into<String>,
        bundles: impl Into<String>,
    ) -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            location: location.into(),
            lsp_server_path: lsp_server_path.into(),
            bundles: bundles.into(),
            dep_open_source_labels_file: None,
        }
    }

    /// Maps loaded settings onto provider options.
    #[must_use]
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let options = Self::new(
            settings.location().as_std_path(),
            settings.lsp_server_path().as_str(),
            settings.bundles(),
        )
        .with_context_lines(settings.context_lines());
        match settings.dep_open_source_labels_file() {
            Some(path) => options.with_dep_open_source_labels_file(path),
            None => options,
        }
    }

    /// Sets the number of context lines.
    #[must_use]
    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    /// Sets the open-source label file. An empty path leaves it unset.
    #[must_use]
    pub fn with_dep_open_source_labels_file(mut self, path: impl Into<String>) -> Self {
        let label_file = path.into();
        self.dep_open_source_labels_file = (!label_file.is_empty()).then_some(label_file);
        self
    }

    /// Provider-specific options understood by the external Java provider.
    ///
    /// The label file key is only inserted when a non-empty path is known;
    /// the provider treats a missing key differently from an empty one.
    #[must_use]
    pub fn provider_specific_config(&self) -> ProviderSpecificConfig {
        let mut config = ProviderSpecificConfig::new();
        config.insert(LSP_SERVER_NAME_KEY, JAVA_PROVIDER_NAME);
        config.insert(BUNDLES_KEY, self.bundles.as_str());
        config.insert(LSP_SERVER_PATH_KEY, self.lsp_server_path.as_str());
        if let Some(path) = self
            .dep_open_source_labels_file
            .as_deref()
            .filter(|path| !path.is_empty())
        {
            config.insert(DEP_OPEN_SOURCE_LABELS_FILE_KEY, path);
        }
        config
    }

    /// Session configuration passed to the provider's `init`.
    ///
    /// Analysis is always source-only and the proxy is always the empty
    /// default.
    #[must_use]
    pub fn init_config(&self) -> InitConfig {
        InitConfig::new(self.location.clone())
            .with_proxy(Proxy::default())
            .with_provider_specific_config(self.provider_specific_config())
            .with_analysis_mode(AnalysisMode::SourceOnly)
    }
}
