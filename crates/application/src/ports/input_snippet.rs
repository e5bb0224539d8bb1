//! Input snippet port

use snippets_domain::ModelDescriptor;

/// Port producing the example input of a model as a JSON literal.
///
/// The returned string is spliced verbatim into a request body, so it must
/// already be valid JSON (a quoted string, an object, ...). Implementations
/// may return a placeholder when no example is known; they never fail.
pub trait InputSnippetProvider: Send + Sync {
    /// Returns the example input for `model`.
    fn input_snippet(&self, model: &ModelDescriptor) -> String;
}

impl<F> InputSnippetProvider for F
where
    F: Fn(&ModelDescriptor) -> String + Send + Sync,
{
    fn input_snippet(&self, model: &ModelDescriptor) -> String {
        self(model)
    }
}
