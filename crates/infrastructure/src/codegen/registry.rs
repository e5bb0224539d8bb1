//! Request body renderers keyed by pipeline tag.
//!
//! The registry is the single source of truth for which models get a
//! request body: [`supports_snippet`] and every generator go through
//! [`lookup`].

use snippets_application::InputSnippetProvider;
use snippets_domain::{ModelDescriptor, PipelineTag};

/// Renders the JSON request body for a model.
pub type BodyRenderer = fn(&ModelDescriptor, &dyn InputSnippetProvider) -> String;

/// Labels offered to zero-shot classification models.
pub const ZERO_SHOT_CANDIDATE_LABELS: [&str; 3] = ["refund", "legal", "faq"];

static BODY_RENDERERS: &[(PipelineTag, BodyRenderer)] = &[
    (PipelineTag::ZeroShotClassification, body_zero_shot_classification),
    (PipelineTag::Translation, body_basic),
    (PipelineTag::Summarization, body_basic),
    (PipelineTag::Conversational, body_basic),
    (PipelineTag::TableQuestionAnswering, body_basic),
    (PipelineTag::QuestionAnswering, body_basic),
    (PipelineTag::TextClassification, body_basic),
    (PipelineTag::TokenClassification, body_basic),
    (PipelineTag::TextGeneration, body_basic),
    (PipelineTag::Text2TextGeneration, body_basic),
    (PipelineTag::FillMask, body_basic),
    (PipelineTag::SentenceSimilarity, body_basic),
    (PipelineTag::FeatureExtraction, body_basic),
];

/// `{"inputs": <input>}`
#[must_use]
pub fn body_basic(model: &ModelDescriptor, inputs: &dyn InputSnippetProvider) -> String {
    format!("{{\"inputs\": {}}}", inputs.input_snippet(model))
}

/// `{"inputs": <input>, "parameters": {"candidate_labels": [...]}}`
#[must_use]
pub fn body_zero_shot_classification(
    model: &ModelDescriptor,
    inputs: &dyn InputSnippetProvider,
) -> String {
    let labels = ZERO_SHOT_CANDIDATE_LABELS
        .iter()
        .map(|label| format!("\"{label}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{{\"inputs\": {}, \"parameters\": {{\"candidate_labels\": [{labels}]}}}}",
        inputs.input_snippet(model)
    )
}

/// Finds the renderer for a raw pipeline tag. Matching is exact.
#[must_use]
pub fn lookup(pipeline_tag: Option<&str>) -> Option<BodyRenderer> {
    let tag = pipeline_tag?;
    BODY_RENDERERS
        .iter()
        .find(|(registered, _)| registered.as_str() == tag)
        .map(|(_, renderer)| *renderer)
}

/// Whether the model's task has a request body renderer.
#[must_use]
pub fn supports_snippet(model: &ModelDescriptor) -> bool {
    lookup(model.pipeline_tag()).is_some()
}

/// Renders the request body, or an empty string when the task has no
/// renderer.
#[must_use]
pub fn render_body(model: &ModelDescriptor, inputs: &dyn InputSnippetProvider) -> String {
    match lookup(model.pipeline_tag()) {
        Some(renderer) => renderer(model, inputs),
        None => {
            tracing::debug!(
                model_id = %model.id,
                pipeline_tag = ?model.pipeline_tag(),
                "no body renderer for pipeline tag, rendering empty body"
            );
            String::new()
        }
    }
}

/// Tags with a renderer, in registration order.
pub fn supported_tags() -> impl Iterator<Item = PipelineTag> {
    BODY_RENDERERS.iter().map(|(tag, _)| *tag)
}
