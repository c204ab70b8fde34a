use thiserror::Error;

/// Errors surfaced by [`OpenAI`](crate::openai::OpenAI).
///
/// A non-2xx HTTP response is deliberately *not* an error: the remote body
/// comes back to the caller verbatim, whatever the status code, and the
/// caller decides what failure means. Only local problems (a payload that
/// cannot be encoded, a missing credential) and transport-level problems
/// (connect, DNS, timeout) appear here.
#[derive(Error, Debug)]
pub enum OpenAIError {
    /// The request never completed: connection refused, DNS failure,
    /// timeout, or the connection died mid-exchange.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The payload could not be serialized to JSON. Raised before any
    /// network activity.
    #[error("failed to encode request payload: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The client was constructed with an empty API key.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// `OPENAI_API_KEY` is not set in the environment.
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,
}

impl OpenAIError {
    /// True if the failure was a per-call deadline expiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }

    /// True if the failure happened while establishing the connection
    /// (refused, unreachable, DNS).
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_connect())
    }
}
