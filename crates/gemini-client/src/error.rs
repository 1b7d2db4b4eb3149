use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status. `message` is the API's own error text when it
    /// sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Response blocked due to safety settings.")]
    SafetyBlocked,

    #[error("Invalid response format from API.")]
    InvalidResponse,

    #[error("API key is required to generate tactics")]
    MissingApiKey,
}
