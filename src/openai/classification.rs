use serde::{Deserialize, Serialize};

use crate::openai::OpenAIConfig;

/// Payload for a completion-based sentiment classification.
///
/// There is no dedicated classification endpoint; the completions endpoint
/// is asked to label the text instead, with temperature 0 and a tight token
/// budget so the answer stays a single label.
///
/// # Example
///
/// ```
/// use aipost::openai::Classification;
///
/// let payload = Classification::sentiment("I love sunny days but hate the rain.");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Classification {
    /// ID of the model to use.
    pub model: String,

    /// The full classification instruction, including the text to label.
    pub prompt: String,

    /// Kept at 0 so the label is deterministic.
    pub temperature: f64,

    /// A handful of tokens is enough for a one-word label.
    pub max_tokens: u64,
}

impl Classification {
    const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo";
    const DEFAULT_TEMPERATURE: f64 = 0.0;
    const DEFAULT_MAX_TOKENS: u64 = 5;
    const SENTIMENT_INSTRUCTION: &'static str =
        "Classify the following text as positive, neutral, or negative sentiment:";

    pub fn get_default_model() -> &'static str {
        Self::DEFAULT_MODEL
    }

    /// Builds a sentiment classification for `text`.
    pub fn sentiment<S: AsRef<str>>(text: S) -> Self {
        Self {
            prompt: format!("{} '{}'", Self::SENTIMENT_INSTRUCTION, text.as_ref()),
            ..<Self as OpenAIConfig>::default()
        }
    }

    pub fn set_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn set_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl OpenAIConfig for Classification {
    // Classification rides on the completions endpoint.
    fn endpoint() -> &'static str {
        super::Completion::endpoint()
    }

    fn default() -> Self {
        Self {
            model: Self::get_default_model().into(),
            prompt: String::new(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_payload_matches_wire_contract() {
        let payload = Classification::sentiment("I love sunny days but hate the rain.");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(
            value["prompt"],
            "Classify the following text as positive, neutral, or negative sentiment: \
             'I love sunny days but hate the rain.'"
        );
        assert_eq!(value["temperature"], 0.0);
        assert_eq!(value["max_tokens"], 5);
    }

    #[test]
    fn classification_shares_the_completions_endpoint() {
        assert_eq!(
            <Classification as OpenAIConfig>::endpoint(),
            "https://api.openai.com/v1/completions"
        );
    }
}
