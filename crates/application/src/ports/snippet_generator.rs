//! Snippet generator port

use snippets_domain::{InferenceSnippet, ModelDescriptor, SnippetLanguage};

/// Port for rendering inference snippets in one language.
pub trait SnippetGenerator: Send + Sync {
    /// Language this generator renders.
    fn language(&self) -> SnippetLanguage;

    /// Whether a snippet with a request body can be produced for `model`.
    ///
    /// Must agree with [`SnippetGenerator::generate`]: when this returns
    /// false, `generate` still succeeds but renders an empty body.
    fn supports(&self, model: &ModelDescriptor) -> bool;

    /// Renders the snippet for `model`, authenticating with `access_token`.
    fn generate(&self, model: &ModelDescriptor, access_token: &str) -> InferenceSnippet;
}
