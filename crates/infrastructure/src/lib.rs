//! Snippets Infrastructure - Adapters and implementations
//!
//! This crate provides the snippet generators, the request body registry
//! they share, and concrete implementations of the ports defined in the
//! application layer.

pub mod codegen;
pub mod config;
pub mod inputs;
pub mod serialization;

pub use codegen::{
    BodyRenderer, CodeGenerator, InferenceSnippetGenerator, generate_node_snippet,
    generate_snippet, generators_for_all_languages, has_node_snippet, render_body,
    supported_tags, supports_snippet,
};
pub use config::{OptionsError, OptionsFormat, load_options, parse_options};
pub use inputs::{DefaultInputSnippets, NO_INPUT_PLACEHOLDER};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, json_literal, json_object, model_from_json,
};
