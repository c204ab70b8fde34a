use serde::{Deserialize, Serialize};

use crate::openai::OpenAIConfig;

/// Payload for the legacy completions endpoint.
///
/// The model continues writing from wherever the prompt leaves off.
///
/// # Example
///
/// ```
/// use aipost::openai::{Completion, OpenAIConfig};
///
/// let payload = Completion::default()
///     .set_prompt("This is a test. The AI will continue writing after this sentence.");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Completion {
    /// ID of the model to use.
    pub model: String,

    /// The prompt to generate a completion for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// The maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,

    /// Sampling temperature between 0 and 2. Higher values make the output
    /// more random, lower values more deterministic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl Completion {
    const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo";
    const DEFAULT_MAX_TOKENS: u64 = 50;
    const DEFAULT_TEMPERATURE: f64 = 0.7;

    pub fn get_default_model() -> &'static str {
        Self::DEFAULT_MODEL
    }

    pub fn get_default_max_tokens() -> u64 {
        Self::DEFAULT_MAX_TOKENS
    }

    pub fn get_default_temperature() -> f64 {
        Self::DEFAULT_TEMPERATURE
    }

    pub fn set_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn set_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn set_max_tokens(mut self, max_tokens: u64) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn set_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl OpenAIConfig for Completion {
    fn endpoint() -> &'static str {
        "https://api.openai.com/v1/completions"
    }

    fn default() -> Self {
        Self {
            model: Self::get_default_model().into(),
            prompt: None,
            max_tokens: Some(Self::get_default_max_tokens()),
            temperature: Some(Self::get_default_temperature()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_payload_serializes_documented_fields() {
        let payload = Completion::default().set_prompt("Say this is a test!");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["prompt"], "Say this is a test!");
        assert_eq!(value["max_tokens"], 50);
        assert_eq!(value["temperature"], 0.7);
    }

    #[test]
    fn setters_override_defaults() {
        let payload = Completion::default()
            .set_model("gpt-4")
            .set_max_tokens(128)
            .set_temperature(0.0);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "gpt-4");
        assert_eq!(value["max_tokens"], 128);
        assert_eq!(value["temperature"], 0.0);
    }
}
