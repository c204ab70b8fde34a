//! aipost: a minimal async client for OpenAI-style generative AI HTTP APIs.
//!
//! One component does all the work: [`openai::OpenAI`] attaches a static
//! bearer credential, POSTs a JSON payload to an endpoint, and hands the raw
//! response body back as text without interpreting the HTTP status. Thin
//! typed payloads for the image generation, completion, embedding, and
//! sentiment classification endpoints are bundled; any `serde::Serialize`
//! value works just as well.
//!
//! ```no_run
//! use aipost::openai::{Completion, OpenAI, OpenAIConfig};
//!
//! # async fn run() -> Result<(), aipost::openai::OpenAIError> {
//! let client = OpenAI::from_env()?;
//! let payload = Completion::default().set_prompt("Say this is a test!");
//! println!("{}", client.send(&payload).await?);
//! # Ok(())
//! # }
//! ```

pub mod openai;

pub use openai::{OpenAI, OpenAIConfig, OpenAIError};
