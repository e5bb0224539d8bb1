//! Pipeline tags: the closed set of inference task identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Inference task a model declares on the hub.
///
/// The string form (see [`PipelineTag::as_str`]) is the exact tag used by the
/// model registry. Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineTag {
    /// Sequence classification
    TextClassification,
    /// Named entity recognition and similar
    TokenClassification,
    /// Question answering over a table
    TableQuestionAnswering,
    /// Extractive question answering
    QuestionAnswering,
    /// Classification against caller supplied labels
    ZeroShotClassification,
    /// Translation
    Translation,
    /// Summarization
    Summarization,
    /// Multi-turn conversation
    Conversational,
    /// Embeddings
    FeatureExtraction,
    /// Causal text generation
    TextGeneration,
    /// Sequence to sequence generation
    #[serde(rename = "text2text-generation")]
    Text2TextGeneration,
    /// Masked language modelling
    FillMask,
    /// Sentence similarity scoring
    SentenceSimilarity,
    /// Speech synthesis
    TextToSpeech,
    /// Speech recognition
    AutomaticSpeechRecognition,
    /// Audio source separation and enhancement
    AudioToAudio,
    /// Audio classification
    AudioClassification,
    /// Voice activity detection
    VoiceActivityDetection,
    /// Image classification
    ImageClassification,
    /// Object detection
    ObjectDetection,
    /// Image segmentation
    ImageSegmentation,
    /// Image generation from text
    TextToImage,
    /// Image captioning
    ImageToText,
}

impl PipelineTag {
    /// Returns the registry string form of the tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TextClassification => "text-classification",
            Self::TokenClassification => "token-classification",
            Self::TableQuestionAnswering => "table-question-answering",
            Self::QuestionAnswering => "question-answering",
            Self::ZeroShotClassification => "zero-shot-classification",
            Self::Translation => "translation",
            Self::Summarization => "summarization",
            Self::Conversational => "conversational",
            Self::FeatureExtraction => "feature-extraction",
            Self::TextGeneration => "text-generation",
            Self::Text2TextGeneration => "text2text-generation",
            Self::FillMask => "fill-mask",
            Self::SentenceSimilarity => "sentence-similarity",
            Self::TextToSpeech => "text-to-speech",
            Self::AutomaticSpeechRecognition => "automatic-speech-recognition",
            Self::AudioToAudio => "audio-to-audio",
            Self::AudioClassification => "audio-classification",
            Self::VoiceActivityDetection => "voice-activity-detection",
            Self::ImageClassification => "image-classification",
            Self::ObjectDetection => "object-detection",
            Self::ImageSegmentation => "image-segmentation",
            Self::TextToImage => "text-to-image",
            Self::ImageToText => "image-to-text",
        }
    }

    /// Get all known pipeline tags.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::TextClassification,
            Self::TokenClassification,
            Self::TableQuestionAnswering,
            Self::QuestionAnswering,
            Self::ZeroShotClassification,
            Self::Translation,
            Self::Summarization,
            Self::Conversational,
            Self::FeatureExtraction,
            Self::TextGeneration,
            Self::Text2TextGeneration,
            Self::FillMask,
            Self::SentenceSimilarity,
            Self::TextToSpeech,
            Self::AutomaticSpeechRecognition,
            Self::AudioToAudio,
            Self::AudioClassification,
            Self::VoiceActivityDetection,
            Self::ImageClassification,
            Self::ObjectDetection,
            Self::ImageSegmentation,
            Self::TextToImage,
            Self::ImageToText,
        ]
    }
}

impl FromStr for PipelineTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPipelineTag(s.to_string()))
    }
}

impl std::fmt::Display for PipelineTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
