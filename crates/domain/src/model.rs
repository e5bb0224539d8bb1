//! Model descriptors as published by the model registry.
//!
//! A descriptor is supplied by the caller (usually deserialized from the
//! registry's model info response) and is never mutated by snippet
//! generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::task::PipelineTag;

/// Mask token assumed when a fill-mask model does not declare one.
pub const DEFAULT_MASK_TOKEN: &str = "[MASK]";

/// Read-only metadata describing a hosted model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Unique model identifier, e.g. `org/model`.
    pub id: String,

    /// Raw task tag. Kept as a string so tags this crate does not know
    /// about survive deserialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_tag: Option<String>,

    /// Tokenizer mask token, for fill-mask models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_token: Option<String>,

    /// Example inputs declared on the model card.
    #[serde(
        default,
        rename = "widgetData",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub widget_data: Vec<WidgetExample>,
}

impl ModelDescriptor {
    /// Creates a descriptor with only an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pipeline_tag: None,
            mask_token: None,
            widget_data: Vec::new(),
        }
    }

    /// Sets the pipeline tag.
    #[must_use]
    pub fn with_pipeline_tag(mut self, tag: impl Into<String>) -> Self {
        self.pipeline_tag = Some(tag.into());
        self
    }

    /// Sets the mask token.
    #[must_use]
    pub fn with_mask_token(mut self, token: impl Into<String>) -> Self {
        self.mask_token = Some(token.into());
        self
    }

    /// Appends a widget example.
    #[must_use]
    pub fn with_widget_example(mut self, example: WidgetExample) -> Self {
        self.widget_data.push(example);
        self
    }

    /// Returns the raw pipeline tag, if any.
    #[must_use]
    pub fn pipeline_tag(&self) -> Option<&str> {
        self.pipeline_tag.as_deref()
    }

    /// Returns the pipeline tag parsed into a known task, if it is one.
    #[must_use]
    pub fn task(&self) -> Option<PipelineTag> {
        self.pipeline_tag()?.parse().ok()
    }

    /// Returns the mask token, falling back to [`DEFAULT_MASK_TOKEN`].
    #[must_use]
    pub fn mask_token_or_default(&self) -> &str {
        self.mask_token.as_deref().unwrap_or(DEFAULT_MASK_TOKEN)
    }

    /// Returns the first widget example, if any.
    #[must_use]
    pub fn first_widget_example(&self) -> Option<&WidgetExample> {
        self.widget_data.first()
    }
}

/// One example input from a model card widget.
///
/// Most tasks only carry `text`; structured tasks (question answering,
/// table question answering, ...) put their inputs in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetExample {
    /// Free text input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Every other field of the example, keyed by name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl WidgetExample {
    /// Creates an example holding only text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            fields: BTreeMap::new(),
        }
    }

    /// Adds a structured field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Returns a field as a string, if it holds one.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(serde_json::Value::as_str)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<WidgetExample>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<WidgetExample>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
