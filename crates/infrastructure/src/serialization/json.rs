//! JSON serialization helpers.

use serde::de::DeserializeOwned;
use serde_json::Value;
use snippets_domain::ModelDescriptor;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Deserializes JSON from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    Ok(serde_json::from_str(json)?)
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parses a model info response from the model registry.
///
/// Fields the descriptor does not model are ignored.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or has no `id`.
pub fn model_from_json(json: &str) -> Result<ModelDescriptor, SerializationError> {
    from_json(json)
}

/// Encodes a string as a JSON string literal, quotes included.
#[must_use]
pub fn json_literal(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}

/// Renders key/value pairs as a single-line JSON object, `{"k": v, ...}`.
///
/// Keys keep the given order; values use compact JSON.
#[must_use]
pub fn json_object<'a>(entries: impl IntoIterator<Item = (&'a str, &'a Value)>) -> String {
    let body = entries
        .into_iter()
        .map(|(key, value)| format!("{}: {}", json_literal(key), value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_literal_escapes_quotes() {
        assert_eq!(json_literal("plain"), "\"plain\"");
        assert_eq!(json_literal("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(json_literal("Меня зовут"), "\"Меня зовут\"");
    }

    #[test]
    fn test_json_object_keeps_order() {
        let question = json!("What is my name?");
        let context = json!("My name is Clara.");
        let rendered = json_object([("question", &question), ("context", &context)]);
        assert_eq!(
            rendered,
            r#"{"question": "What is my name?", "context": "My name is Clara."}"#
        );
    }

    #[test]
    fn test_json_object_compacts_nested_values() {
        let sentences = json!(["a", "b"]);
        let rendered = json_object([("sentences", &sentences)]);
        assert_eq!(rendered, r#"{"sentences": ["a","b"]}"#);
    }

    #[test]
    fn test_model_from_json() {
        let model = model_from_json(r#"{"id": "gpt2", "pipeline_tag": "text-generation"}"#)
            .expect("deserialization should work");
        assert_eq!(model.id, "gpt2");
        assert_eq!(model.pipeline_tag(), Some("text-generation"));
    }

    #[test]
    fn test_model_from_json_requires_id() {
        let result = model_from_json(r#"{"pipeline_tag": "text-generation"}"#);
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }

    #[test]
    fn test_from_json_bytes() {
        let result: serde_json::Value =
            from_json_bytes(br#"{"name": "test"}"#).expect("deserialization should work");
        assert_eq!(result["name"], "test");
    }
}
