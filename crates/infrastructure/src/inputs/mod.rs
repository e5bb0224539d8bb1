//! Input snippet adapters.

mod defaults;

pub use defaults::{DefaultInputSnippets, NO_INPUT_PLACEHOLDER};
