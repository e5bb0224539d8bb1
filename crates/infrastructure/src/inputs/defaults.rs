//! Built-in example inputs per task, overridden by model card widget data.

use serde_json::Value;
use snippets_application::InputSnippetProvider;
use snippets_domain::{ModelDescriptor, PipelineTag, WidgetExample};

use crate::serialization::{json_literal, json_object};

/// Text used when neither widget data nor a built-in sample exists.
pub const NO_INPUT_PLACEHOLDER: &str = "No input example has been defined for this model task.";

const SUMMARIZATION_SAMPLE: &str = "The tower is 324 metres (1,063 ft) tall, about the same height as an 81-storey building, and the tallest structure in Paris. Its base is square, measuring 125 metres (410 ft) on each side. During its construction, the Eiffel Tower surpassed the Washington Monument to become the tallest man-made structure in the world, a title it held for 41 years until the Chrysler Building in New York City was finished in 1930. It was the first structure to reach a height of 300 metres. Due to the addition of a broadcasting aerial at the top of the tower in 1957, it is now taller than the Chrysler Building by 5.2 metres (17 ft). Excluding transmitters, the Eiffel Tower is the second tallest free-standing structure in France after the Millau Viaduct.";

/// Widget fields that describe the example rather than feed the model.
const WIDGET_METADATA_FIELDS: [&str; 3] = ["example_title", "group", "output"];

/// Default [`InputSnippetProvider`].
///
/// Uses the first widget example of the model when it fits the task,
/// otherwise a built-in sample for the task, otherwise
/// [`NO_INPUT_PLACEHOLDER`] as a JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInputSnippets;

impl DefaultInputSnippets {
    /// Creates the provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InputSnippetProvider for DefaultInputSnippets {
    fn input_snippet(&self, model: &ModelDescriptor) -> String {
        let task = model.task();

        if let Some(input) = model
            .first_widget_example()
            .and_then(|example| widget_input(task, example))
        {
            return input;
        }

        task.and_then(|task| builtin_input(task, model))
            .unwrap_or_else(|| json_literal(NO_INPUT_PLACEHOLDER))
    }
}

fn widget_input(task: Option<PipelineTag>, example: &WidgetExample) -> Option<String> {
    match task {
        Some(PipelineTag::QuestionAnswering) => {
            let question = Value::String(example.text.clone()?);
            let context = example.fields.get("context")?;
            Some(json_object([("question", &question), ("context", context)]))
        }
        Some(PipelineTag::TableQuestionAnswering) => {
            let query = Value::String(example.text.clone()?);
            let table = example.fields.get("table")?;
            Some(json_object([("query", &query), ("table", table)]))
        }
        Some(PipelineTag::SentenceSimilarity) => {
            let source = example.fields.get("source_sentence")?;
            let sentences = example.fields.get("sentences")?;
            Some(json_object([
                ("source_sentence", source),
                ("sentences", sentences),
            ]))
        }
        // Conversation widgets hold a single turn, the built-in sample is richer.
        Some(PipelineTag::Conversational) => None,
        _ => match &example.text {
            Some(text) => Some(json_literal(text)),
            None => structured_fields(example),
        },
    }
}

fn structured_fields(example: &WidgetExample) -> Option<String> {
    let entries: Vec<_> = example
        .fields
        .iter()
        .filter(|(key, _)| !WIDGET_METADATA_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.as_str(), value))
        .collect();

    if entries.is_empty() {
        return None;
    }
    Some(json_object(entries))
}

fn builtin_input(task: PipelineTag, model: &ModelDescriptor) -> Option<String> {
    let input = match task {
        PipelineTag::Translation => json_literal("Меня зовут Вольфганг и я живу в Берлине"),
        PipelineTag::Summarization => json_literal(SUMMARIZATION_SAMPLE),
        PipelineTag::Conversational => r#"{"past_user_inputs": ["Which movie is the best ?"], "generated_responses": ["It's Die Hard for sure."], "text": "Can you explain why ?"}"#.to_string(),
        PipelineTag::TableQuestionAnswering => r#"{"query": "How many stars does the transformers repository have?", "table": {"Repository": ["Transformers", "Datasets", "Tokenizers"], "Stars": ["36542", "4512", "3934"], "Contributors": ["651", "77", "34"], "Programming language": ["Python", "Python", "Rust, Python and NodeJS"]}}"#.to_string(),
        PipelineTag::QuestionAnswering => r#"{"question": "What is my name?", "context": "My name is Clara and I live in Berkeley."}"#.to_string(),
        PipelineTag::ZeroShotClassification => json_literal(
            "Hi, I recently bought a device from your company but it is not working as advertised and I would like to get reimbursed!",
        ),
        PipelineTag::TextClassification => json_literal("I like you. I love you"),
        PipelineTag::TokenClassification => {
            json_literal("My name is Sarah Jessica Parker but you can call me Jessica")
        }
        PipelineTag::TextGeneration => {
            json_literal("Can you please let us know more details about your ")
        }
        PipelineTag::Text2TextGeneration => json_literal("The answer to the universe is"),
        PipelineTag::FillMask => json_literal(&format!(
            "The answer to the universe is {}.",
            model.mask_token_or_default()
        )),
        PipelineTag::SentenceSimilarity => r#"{"source_sentence": "That is a happy person", "sentences": ["That is a happy dog", "That is a very happy person", "Today is a sunny day"]}"#.to_string(),
        PipelineTag::FeatureExtraction => {
            json_literal("Today is a sunny day and I'll get some ice cream.")
        }
        PipelineTag::TextToImage => json_literal("Astronaut riding a horse"),
        PipelineTag::ImageClassification
        | PipelineTag::ObjectDetection
        | PipelineTag::ImageSegmentation
        | PipelineTag::ImageToText => json_literal("cats.jpg"),
        PipelineTag::AutomaticSpeechRecognition
        | PipelineTag::AudioClassification
        | PipelineTag::AudioToAudio
        | PipelineTag::VoiceActivityDetection => json_literal("sample1.flac"),
        PipelineTag::TextToSpeech => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn snippet(model: &ModelDescriptor) -> String {
        DefaultInputSnippets::new().input_snippet(model)
    }

    #[test]
    fn test_builtin_sample_per_task() {
        let model = ModelDescriptor::new("org/model").with_pipeline_tag("text-classification");
        assert_eq!(snippet(&model), "\"I like you. I love you\"");

        let model = ModelDescriptor::new("org/model").with_pipeline_tag("question-answering");
        assert_eq!(
            snippet(&model),
            r#"{"question": "What is my name?", "context": "My name is Clara and I live in Berkeley."}"#
        );
    }

    #[test]
    fn test_fill_mask_uses_model_mask_token() {
        let model = ModelDescriptor::new("roberta-base")
            .with_pipeline_tag("fill-mask")
            .with_mask_token("<mask>");
        assert_eq!(snippet(&model), "\"The answer to the universe is <mask>.\"");

        let model = ModelDescriptor::new("bert-base-uncased").with_pipeline_tag("fill-mask");
        assert_eq!(snippet(&model), "\"The answer to the universe is [MASK].\"");
    }

    #[test]
    fn test_widget_text_wins_over_builtin_sample() {
        let model = ModelDescriptor::new("org/model")
            .with_pipeline_tag("translation")
            .with_widget_example(WidgetExample::text("My name is \"Wolfgang\""));
        assert_eq!(snippet(&model), r#""My name is \"Wolfgang\"""#);
    }

    #[test]
    fn test_widget_question_answering() {
        let model = ModelDescriptor::new("org/model")
            .with_pipeline_tag("question-answering")
            .with_widget_example(
                WidgetExample::text("Where do I live?")
                    .with_field("context", json!("I live in Berlin"))
                    .with_field("example_title", json!("Berlin")),
            );
        assert_eq!(
            snippet(&model),
            r#"{"question": "Where do I live?", "context": "I live in Berlin"}"#
        );
    }

    #[test]
    fn test_incomplete_qa_widget_falls_back_to_builtin() {
        let model = ModelDescriptor::new("org/model")
            .with_pipeline_tag("question-answering")
            .with_widget_example(WidgetExample::text("Where do I live?"));
        assert!(snippet(&model).contains("My name is Clara"));
    }

    #[test]
    fn test_widget_structured_fields_skip_metadata() {
        let model = ModelDescriptor::new("org/model").with_widget_example(
            WidgetExample::default()
                .with_field("src", json!("sample.wav"))
                .with_field("example_title", json!("Librispeech")),
        );
        assert_eq!(snippet(&model), r#"{"src": "sample.wav"}"#);
    }

    #[test]
    fn test_placeholder_without_task_or_widget() {
        let model = ModelDescriptor::new("org/model");
        assert_eq!(snippet(&model), json_literal(NO_INPUT_PLACEHOLDER));

        let model = ModelDescriptor::new("org/model").with_pipeline_tag("text-to-speech");
        assert_eq!(
            snippet(&model),
            "\"No input example has been defined for this model task.\""
        );
    }
}
