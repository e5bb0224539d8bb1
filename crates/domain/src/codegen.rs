//! Code generation types for inference API snippets.
//!
//! This module provides the languages a snippet can be rendered in, the
//! options controlling generation, and the generated snippet itself.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Base URL of the hosted inference API.
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";

/// Supported languages for snippet generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SnippetLanguage {
    /// JavaScript on Node with node-fetch
    #[default]
    JavaScript,
    /// Python with requests library
    Python,
    /// cURL command line
    Curl,
}

impl SnippetLanguage {
    /// Get display name for the language.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript (node-fetch)",
            Self::Python => "Python (requests)",
            Self::Curl => "cURL",
        }
    }

    /// Get file extension for the language.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::Python => "py",
            Self::Curl => "sh",
        }
    }

    /// Lowercase identifier, as used in configuration files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Curl => "curl",
        }
    }

    /// Get all available languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::JavaScript, Self::Python, Self::Curl]
    }
}

impl std::fmt::Display for SnippetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SnippetLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownLanguage(s.to_string()))
    }
}

/// Options for snippet generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetOptions {
    /// Target language.
    #[serde(default)]
    pub language: SnippetLanguage,
    /// Inference API base URL. `None` means [`DEFAULT_API_BASE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<Url>,
}

impl SnippetOptions {
    /// Create options for a specific language with defaults.
    #[must_use]
    pub fn for_language(language: SnippetLanguage) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = Some(api_base);
        self
    }

    /// Checks that the configured base URL can be used in a snippet.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidApiBase`] if the URL is not http(s) or
    /// carries a query or fragment.
    pub fn validate(&self) -> DomainResult<()> {
        let Some(base) = &self.api_base else {
            return Ok(());
        };

        if !matches!(base.scheme(), "http" | "https") {
            return Err(DomainError::InvalidApiBase(format!(
                "unsupported scheme '{}' in {base}",
                base.scheme()
            )));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(DomainError::InvalidApiBase(format!(
                "query or fragment not allowed in {base}"
            )));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base
            .as_ref()
            .map_or(DEFAULT_API_BASE, |url| url.as_str().trim_end_matches('/'))
    }

    /// Endpoint for a model. The id is inserted verbatim.
    #[must_use]
    pub fn model_url(&self, model_id: &str) -> String {
        format!("{}/models/{model_id}", self.api_base())
    }
}

/// Generated code snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceSnippet {
    /// The generated code.
    pub code: String,
    /// Language of the generated code.
    pub language: SnippetLanguage,
    /// Model the snippet queries.
    pub model_id: String,
}

impl InferenceSnippet {
    /// Create a new code snippet.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        language: SnippetLanguage,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            language,
            model_id: model_id.into(),
        }
    }

    /// File name a user could save the snippet under.
    #[must_use]
    pub fn suggested_file_name(&self) -> String {
        format!("query.{}", self.language.file_extension())
    }
}
