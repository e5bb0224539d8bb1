//! Snippets Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for input examples and snippet generators)
//! - Use case orchestration

pub mod ports;
pub mod use_cases;

pub use ports::{InputSnippetProvider, SnippetGenerator};
pub use use_cases::{CollectSnippets, CollectSnippetsInput, CollectSnippetsOutput};
