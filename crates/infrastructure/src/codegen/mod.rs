//! Code generation infrastructure.
//!
//! This module provides the request body registry and the snippet
//! generators built on top of it.

mod generator;
pub mod registry;

pub use generator::{
    CodeGenerator, InferenceSnippetGenerator, generate_node_snippet, generate_snippet,
    generators_for_all_languages, has_node_snippet,
};
pub use registry::{BodyRenderer, render_body, supported_tags, supports_snippet};
