//! `gemini-client`: one-shot text generation against the Gemini
//! `generateContent` endpoint.
//!
//! # Architecture
//!
//! ```text
//! ClientConfig
//!     │
//!     ▼
//! GeminiClient    ← reqwest client, base URL, model, API key
//!     │              POST {base}/models/{model}:generateContent
//!     ▼
//! GenerateResponse ← typed response; first candidate's first text part
//! ```
//!
//! There is no retry and no streaming. A request either yields the generated
//! text or a [`GeminiError`] describing why it did not.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gemini_client::{ClientConfig, GeminiClient};
//!
//! let client = GeminiClient::new(ClientConfig::new("my-key"))?;
//! let text = client.generate("Give me a game plan.").await?;
//! ```

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{ClientConfig, GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::GeminiError;
pub use types::{Candidate, FinishReason, GenerateRequest, GenerateResponse};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, GeminiError>;
