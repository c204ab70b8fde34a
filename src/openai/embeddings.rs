use serde::{Deserialize, Serialize};

use crate::openai::OpenAIConfig;

/// Input accepted by the embeddings endpoint: a single string, an array of
/// strings, or an array of pre-encoded tokens.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum InputType {
    SingleString(String),
    MultipleStrings(Vec<String>),
    MultipleTokens(Vec<u64>),
}

impl From<&str> for InputType {
    fn from(input: &str) -> Self {
        InputType::SingleString(input.to_string())
    }
}

impl From<String> for InputType {
    fn from(input: String) -> Self {
        InputType::SingleString(input)
    }
}

impl From<Vec<String>> for InputType {
    fn from(input: Vec<String>) -> Self {
        InputType::MultipleStrings(input)
    }
}

impl From<Vec<u64>> for InputType {
    fn from(input: Vec<u64>) -> Self {
        InputType::MultipleTokens(input)
    }
}

/// Payload for the embeddings endpoint.
///
/// Embeddings measure the relatedness of text strings and are commonly used
/// for search, clustering, recommendations, and classification.
///
/// # Example
///
/// ```
/// use aipost::openai::{Embedding, OpenAIConfig};
///
/// let payload = Embedding::default().set_input("This is a test sentence for embedding.");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Embedding {
    /// ID of the model to use.
    pub model: String,

    /// Input text to embed. Pass an array of strings or token arrays to
    /// embed multiple inputs in a single request.
    pub input: InputType,
}

impl Embedding {
    const DEFAULT_MODEL: &'static str = "text-similarity-davinci-001";

    pub fn get_default_model() -> &'static str {
        Self::DEFAULT_MODEL
    }

    pub fn set_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn set_input<I: Into<InputType>>(mut self, input: I) -> Self {
        self.input = input.into();
        self
    }
}

impl OpenAIConfig for Embedding {
    fn endpoint() -> &'static str {
        "https://api.openai.com/v1/embeddings"
    }

    fn default() -> Self {
        Self {
            model: Self::get_default_model().into(),
            input: InputType::SingleString(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_string_input_serializes_flat() {
        let payload = Embedding::default().set_input("hi");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "text-similarity-davinci-001");
        assert_eq!(value["input"], "hi");
    }

    #[test]
    fn multiple_strings_serialize_as_array() {
        let payload = Embedding::default().set_input(vec!["a".to_string(), "b".to_string()]);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["input"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn token_input_serializes_as_numbers() {
        let payload = Embedding::default().set_input(vec![1u64, 2, 3]);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["input"], serde_json::json!([1, 2, 3]));
    }
}
