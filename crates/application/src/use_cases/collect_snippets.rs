//! Collect snippets use case.

use snippets_domain::{InferenceSnippet, ModelDescriptor, SnippetLanguage};

use crate::ports::SnippetGenerator;

/// Input for collecting the snippets of a model.
#[derive(Debug, Clone)]
pub struct CollectSnippetsInput {
    /// The model to render snippets for.
    pub model: ModelDescriptor,
    /// Access token substituted into every snippet.
    pub access_token: String,
}

impl CollectSnippetsInput {
    /// Creates a new input.
    #[must_use]
    pub fn new(model: ModelDescriptor, access_token: impl Into<String>) -> Self {
        Self {
            model,
            access_token: access_token.into(),
        }
    }
}

/// Output from collecting snippets.
#[derive(Debug, Clone, Default)]
pub struct CollectSnippetsOutput {
    /// One snippet per generator that supports the model, in generator order.
    pub snippets: Vec<InferenceSnippet>,
}

impl CollectSnippetsOutput {
    /// Returns the snippet for a language, if one was produced.
    #[must_use]
    pub fn get(&self, language: SnippetLanguage) -> Option<&InferenceSnippet> {
        self.snippets.iter().find(|s| s.language == language)
    }

    /// Returns true if no generator supported the model.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Use case gathering every snippet a usage panel should offer for a model.
///
/// A model no generator supports yields an empty output, not an error.
pub struct CollectSnippets {
    generators: Vec<Box<dyn SnippetGenerator>>,
}

impl CollectSnippets {
    /// Creates the use case from a list of generators.
    #[must_use]
    pub fn new(generators: Vec<Box<dyn SnippetGenerator>>) -> Self {
        Self { generators }
    }

    /// Adds a generator after the existing ones.
    #[must_use]
    pub fn with_generator(mut self, generator: impl SnippetGenerator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Languages of the registered generators, in order.
    pub fn languages(&self) -> impl Iterator<Item = SnippetLanguage> + '_ {
        self.generators.iter().map(|g| g.language())
    }

    /// Renders the snippets of every generator that supports the model.
    #[must_use]
    pub fn execute(&self, input: &CollectSnippetsInput) -> CollectSnippetsOutput {
        let snippets: Vec<_> = self
            .generators
            .iter()
            .filter(|g| g.supports(&input.model))
            .map(|g| g.generate(&input.model, &input.access_token))
            .collect();

        tracing::debug!(
            model_id = %input.model.id,
            pipeline_tag = ?input.model.pipeline_tag(),
            count = snippets.len(),
            "collected inference snippets"
        );

        CollectSnippetsOutput { snippets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FakeGenerator {
        language: SnippetLanguage,
        supported_tag: &'static str,
    }

    impl SnippetGenerator for FakeGenerator {
        fn language(&self) -> SnippetLanguage {
            self.language
        }

        fn supports(&self, model: &ModelDescriptor) -> bool {
            model.pipeline_tag() == Some(self.supported_tag)
        }

        fn generate(&self, model: &ModelDescriptor, access_token: &str) -> InferenceSnippet {
            InferenceSnippet::new(
                format!("{} {}", model.id, access_token),
                self.language,
                model.id.clone(),
            )
        }
    }

    fn use_case() -> CollectSnippets {
        CollectSnippets::new(Vec::new())
            .with_generator(FakeGenerator {
                language: SnippetLanguage::JavaScript,
                supported_tag: "translation",
            })
            .with_generator(FakeGenerator {
                language: SnippetLanguage::Curl,
                supported_tag: "translation",
            })
            .with_generator(FakeGenerator {
                language: SnippetLanguage::Python,
                supported_tag: "fill-mask",
            })
    }

    #[test]
    fn test_collects_supported_generators_in_order() {
        let input = CollectSnippetsInput::new(
            ModelDescriptor::new("org/model").with_pipeline_tag("translation"),
            "hf_token",
        );

        let output = use_case().execute(&input);

        let languages: Vec<_> = output.snippets.iter().map(|s| s.language).collect();
        assert_eq!(languages, vec![SnippetLanguage::JavaScript, SnippetLanguage::Curl]);
        assert_eq!(output.get(SnippetLanguage::Curl).map(|s| s.code.as_str()), Some("org/model hf_token"));
        assert!(output.get(SnippetLanguage::Python).is_none());
    }

    #[test]
    fn test_unsupported_model_yields_empty_output() {
        let input = CollectSnippetsInput::new(ModelDescriptor::new("org/model"), "");
        let output = use_case().execute(&input);
        assert!(output.is_empty());
    }

    #[test]
    fn test_languages() {
        let languages: Vec<_> = use_case().languages().collect();
        assert_eq!(
            languages,
            vec![SnippetLanguage::JavaScript, SnippetLanguage::Curl, SnippetLanguage::Python]
        );
    }
}
