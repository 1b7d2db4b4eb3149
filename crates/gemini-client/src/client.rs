use crate::types::{ErrorEnvelope, GenerateRequest, GenerateResponse};
use crate::{GeminiError, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// ─── ClientConfig ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Whole-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

// ─── GeminiClient ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send `prompt` once and return the generated text.
    ///
    /// No retry is attempted; every failure is returned to the caller.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint();
        tracing::info!(model = %self.config.model, prompt_len = prompt.len(), "requesting generation");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = ErrorEnvelope::message_for(&body, status.as_u16());
            tracing::warn!(status = status.as_u16(), %message, "generation request failed");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|_| GeminiError::InvalidResponse)?;
        let text = parsed.first_text()?;
        tracing::debug!(
            finish_reason = ?parsed.candidates.first().and_then(|c| c.finish_reason),
            text_len = text.len(),
            "generation complete"
        );
        Ok(text.to_string())
    }
}
