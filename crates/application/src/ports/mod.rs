//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod input_snippet;
mod snippet_generator;

pub use input_snippet::InputSnippetProvider;
pub use snippet_generator::SnippetGenerator;
