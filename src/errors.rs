use thiserror::Error;

/// AuthSecure Errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Failed to send a request to the AuthSecure API.
    /// Covers connection refusal, DNS failure, and timeouts.
    #[error("Failed to send a request to the AuthSecure API: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The AuthSecure API returned a body that is not the expected JSON.
    /// Carries the raw body text for diagnosis.
    #[error("Failed to decode AuthSecure API response: {source}\nRaw: {body}")]
    DecodeFailed {
        source: serde_json::Error,
        body: String,
    },

    /// The AuthSecure API answered with `success = false`.
    /// The payload is the message the server sent back.
    #[error("{0}")]
    Rejected(String),
}
