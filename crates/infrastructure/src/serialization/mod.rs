//! JSON helpers for model descriptors and input literals.
//!
//! Input snippets are spliced verbatim into request bodies, so every string
//! that ends up there goes through [`json_literal`] first.

mod json;

pub use json::*;
