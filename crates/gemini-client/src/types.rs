use crate::error::GeminiError;
use serde::{Deserialize, Serialize};

// ─── Request ──────────────────────────────────────────────────────────────

/// Body of a `generateContent` call: a single user turn with one text part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ─── Response ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<FinishReason>,
}

/// Why the model stopped. Only `SAFETY` changes how a response is handled;
/// the rest are kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Other,
    #[serde(other)]
    Unknown,
}

impl GenerateResponse {
    /// The text of the first part of the first candidate.
    ///
    /// A first candidate without content reports [`GeminiError::SafetyBlocked`]
    /// when it finished for safety reasons, otherwise
    /// [`GeminiError::InvalidResponse`].
    pub fn first_text(&self) -> Result<&str, GeminiError> {
        let candidate = self
            .candidates
            .first()
            .ok_or(GeminiError::InvalidResponse)?;

        match &candidate.content {
            Some(content) => content
                .parts
                .first()
                .and_then(|p| p.text.as_deref())
                .ok_or(GeminiError::InvalidResponse),
            None if candidate.finish_reason == Some(FinishReason::Safety) => {
                Err(GeminiError::SafetyBlocked)
            }
            None => Err(GeminiError::InvalidResponse),
        }
    }
}

// ─── Error envelope ───────────────────────────────────────────────────────

/// `{"error": {"message": ..., "code": ...}}` as sent with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorInfo {
    pub message: Option<String>,
    pub code: Option<i32>,
}

impl ErrorEnvelope {
    /// Error message from a non-success body, or the generic status text.
    pub fn message_for(body: &str, status: u16) -> String {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|e| e.error)
            .and_then(|e| e.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {status}"))
    }
}
