use std::env;
use std::time::Duration;

use log::debug;
use reqwest::{Client, IntoUrl, Url};
use serde::Serialize;

pub mod classification;
pub mod completions;
pub mod embeddings;
pub mod error;
pub mod image;

pub use classification::Classification;
pub use completions::Completion;
pub use embeddings::{Embedding, InputType};
pub use error::OpenAIError;
pub use image::{Image, ImageSize};

/// A request payload with a well-known endpoint.
///
/// Implemented by the bundled payload types so they can be routed with
/// [`OpenAI::send`] instead of spelling the URL out at every call site.
pub trait OpenAIConfig: Send + Sync {
    /// The URL this payload is POSTed to.
    fn endpoint() -> &'static str;

    /// A payload pre-filled with the documented default values.
    fn default() -> Self;
}

/// An authenticated client for OpenAI-style JSON-over-HTTPS APIs.
///
/// The client owns a single [`reqwest::Client`] (and with it the connection
/// pool), created once at construction and reused for every call. The API
/// key is captured at construction and attached to every outbound request as
/// `Authorization: Bearer <key>`; it cannot be changed afterwards.
///
/// Every method takes `&self` and keeps no per-call state, so one instance
/// can serve any number of concurrent in-flight requests. Cloning is cheap
/// and shares the underlying pool.
///
/// The client never interprets HTTP status codes: a 500 body is returned to
/// the caller exactly like a 200 body. See [`OpenAIError`] for what *does*
/// count as an error.
///
/// # Example
///
/// ```no_run
/// use aipost::openai::{Embedding, OpenAI, OpenAIConfig};
///
/// # async fn run() -> Result<(), aipost::openai::OpenAIError> {
/// let client = OpenAI::from_env()?;
/// let payload = Embedding::default().set_input("The food was delicious and the waiter...");
/// let raw = client.send(&payload).await?;
/// println!("{raw}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct OpenAI {
    client: Client,
    api_key: String,
}

impl OpenAI {
    /// Creates a client that authenticates with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAIError::EmptyApiKey`] if the key is empty. No other
    /// validation happens locally; a wrong key is the remote server's call.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self, OpenAIError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(OpenAIError::EmptyApiKey);
        }
        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    /// Creates a client from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAIError::MissingApiKey`] if the variable is unset.
    pub fn from_env() -> Result<Self, OpenAIError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| OpenAIError::MissingApiKey)?;
        Self::new(api_key)
    }

    /// POSTs `payload` as JSON to `url` and returns the raw response body.
    ///
    /// The payload is serialized before any network activity, so an encoding
    /// failure costs zero network calls. The body comes back verbatim
    /// whatever the HTTP status; use [`OpenAI::post_for_response`] if you
    /// want to inspect the status yourself.
    ///
    /// # Errors
    ///
    /// [`OpenAIError::Encoding`] if the payload cannot be serialized,
    /// [`OpenAIError::Transport`] if the exchange fails at the network level.
    pub async fn post<U, T>(&self, url: U, payload: &T) -> Result<String, OpenAIError>
    where
        U: IntoUrl + Send,
        T: Serialize + Sync + ?Sized,
    {
        let response = self.dispatch(url, payload, None).await?;
        Self::read_body(response).await
    }

    /// Like [`OpenAI::post`], but enforces a per-call deadline on top of the
    /// transport default. A call that times out never disturbs other
    /// in-flight calls on the same client.
    pub async fn post_with_timeout<U, T>(
        &self,
        url: U,
        payload: &T,
        deadline: Duration,
    ) -> Result<String, OpenAIError>
    where
        U: IntoUrl + Send,
        T: Serialize + Sync + ?Sized,
    {
        let response = self.dispatch(url, payload, Some(deadline)).await?;
        Self::read_body(response).await
    }

    /// POSTs `payload` to `url` and hands back the raw [`reqwest::Response`]
    /// for callers that want to look at the status code or headers before
    /// consuming the body.
    pub async fn post_for_response<U, T>(
        &self,
        url: U,
        payload: &T,
    ) -> Result<reqwest::Response, OpenAIError>
    where
        U: IntoUrl + Send,
        T: Serialize + Sync + ?Sized,
    {
        self.dispatch(url, payload, None).await
    }

    /// POSTs a typed payload to its well-known endpoint.
    pub async fn send<C>(&self, config: &C) -> Result<String, OpenAIError>
    where
        C: OpenAIConfig + Serialize,
    {
        self.post(C::endpoint(), config).await
    }

    async fn dispatch<U, T>(
        &self,
        url: U,
        payload: &T,
        deadline: Option<Duration>,
    ) -> Result<reqwest::Response, OpenAIError>
    where
        U: IntoUrl + Send,
        T: Serialize + Sync + ?Sized,
    {
        // Serialize eagerly: a bad payload must fail before the socket is touched.
        let body = serde_json::to_string(payload)?;

        let mut builder = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .body(body);
        if let Some(deadline) = deadline {
            builder = builder.timeout(deadline);
        }
        let request = builder.build().map_err(|source| OpenAIError::Transport {
            url: source.url().map(Url::to_string).unwrap_or_default(),
            source,
        })?;

        let url = request.url().to_string();
        debug!("POST {url}");
        self.client
            .execute(request)
            .await
            .map_err(|source| OpenAIError::Transport { url, source })
    }

    async fn read_body(response: reqwest::Response) -> Result<String, OpenAIError> {
        let url = response.url().to_string();
        response
            .text()
            .await
            .map_err(|source| OpenAIError::Transport { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        let err = OpenAI::new("").unwrap_err();
        assert!(matches!(err, OpenAIError::EmptyApiKey));
    }

    #[test]
    fn non_empty_api_key_is_accepted() {
        assert!(OpenAI::new("sk-test").is_ok());
    }

    #[test]
    fn client_is_cloneable() {
        let client = OpenAI::new("sk-test").unwrap();
        let _shared = client.clone();
    }
}
