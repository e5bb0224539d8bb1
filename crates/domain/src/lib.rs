//! Snippets Domain - Core types
//!
//! This crate defines the domain model for inference API snippet generation.
//! All types here are pure Rust with no I/O dependencies.

pub mod codegen;
pub mod error;
pub mod model;
pub mod task;

pub use codegen::{DEFAULT_API_BASE, InferenceSnippet, SnippetLanguage, SnippetOptions};
pub use error::{DomainError, DomainResult};
pub use model::{DEFAULT_MASK_TOKEN, ModelDescriptor, WidgetExample};
pub use task::PipelineTag;
