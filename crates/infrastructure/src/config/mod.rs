//! Snippet options loading.
//!
//! Options live in a JSON (`.json`) or YAML (`.yaml`, `.yml`) file. A missing
//! file means default options.

use std::fs;
use std::path::{Path, PathBuf};

use snippets_domain::{DomainError, SnippetOptions};

use crate::serialization::{SerializationError, from_json};

/// Error type for options loading.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// IO error while reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON document is invalid.
    #[error("Serialization error: {0}")]
    Json(#[from] SerializationError),

    /// The YAML document is invalid.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The options parsed but are not usable.
    #[error("Invalid options: {0}")]
    Invalid(#[from] DomainError),

    /// The file extension names no supported format.
    #[error("Unsupported options file: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Format of an options document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl OptionsFormat {
    /// Detects the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parses and validates options from a document.
///
/// # Errors
///
/// Returns an error if the document is malformed or the options are invalid.
pub fn parse_options(content: &str, format: OptionsFormat) -> Result<SnippetOptions, OptionsError> {
    let options: SnippetOptions = match format {
        OptionsFormat::Json => from_json(content)?,
        OptionsFormat::Yaml => serde_yaml::from_str(content)?,
    };
    options.validate()?;
    Ok(options)
}

/// Loads options from a file.
///
/// Returns default options if the file doesn't exist.
///
/// # Errors
///
/// Returns an error if the extension is not supported, the file can't be
/// read, or its content is invalid.
pub fn load_options(path: &Path) -> Result<SnippetOptions, OptionsError> {
    let Some(format) = OptionsFormat::from_path(path) else {
        return Err(OptionsError::UnsupportedFormat(path.to_path_buf()));
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "options file not found, using defaults");
        return Ok(SnippetOptions::default());
    }

    let content = fs::read_to_string(path)?;
    let options = parse_options(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        language = options.language.as_str(),
        api_base = options.api_base(),
        "loaded snippet options"
    );
    Ok(options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use snippets_domain::SnippetLanguage;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OptionsFormat::from_path(Path::new("a.json")), Some(OptionsFormat::Json));
        assert_eq!(OptionsFormat::from_path(Path::new("a.YML")), Some(OptionsFormat::Yaml));
        assert_eq!(OptionsFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(OptionsFormat::from_path(Path::new("snippets")), None);
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("snippets.yaml");
        fs::write(&path, "language: python\napi_base: http://localhost:8080\n").unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.language, SnippetLanguage::Python);
        assert_eq!(options.model_url("gpt2"), "http://localhost:8080/models/gpt2");
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("snippets.json");
        fs::write(&path, r#"{"language": "curl"}"#).unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.language, SnippetLanguage::Curl);
        assert_eq!(options.api_base, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().expect("Failed to create temp directory");
        let options = load_options(&dir.path().join("absent.yml")).unwrap();
        assert_eq!(options, SnippetOptions::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_options(Path::new("snippets.toml"));
        assert!(matches!(result, Err(OptionsError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            parse_options("{", OptionsFormat::Json),
            Err(OptionsError::Json(_))
        ));
        assert!(matches!(
            parse_options("language: [", OptionsFormat::Yaml),
            Err(OptionsError::Yaml(_))
        ));
        assert!(matches!(
            parse_options("language: fortran", OptionsFormat::Yaml),
            Err(OptionsError::Yaml(_))
        ));
        assert!(matches!(
            parse_options(r#"{"api_base": "ftp://example.com"}"#, OptionsFormat::Json),
            Err(OptionsError::Invalid(DomainError::InvalidApiBase(_)))
        ));
    }
}
