//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during parsing or validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The string does not name a known pipeline tag.
    #[error("unknown pipeline tag: {0}")]
    UnknownPipelineTag(String),

    /// The string does not name a known snippet language.
    #[error("unknown snippet language: {0}")]
    UnknownLanguage(String),

    /// The configured inference API base URL is unusable.
    #[error("invalid API base URL: {0}")]
    InvalidApiBase(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
