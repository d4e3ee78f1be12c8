use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("provider returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("completion API error: status={status}, body={body}")]
    Api { status: u16, body: String },

    /// Typed stand-in for the original's substring match on rate-limit and
    /// quota error text: the endpoint signals both with HTTP 429.
    #[error("completion API rate limited: status={status}, body={body}")]
    RateLimited { status: u16, body: String },
}

impl CompletionError {
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// True for failures a caller may paper over with a stand-in score:
    /// rate limiting, and replies that came back malformed at the envelope
    /// level (undecodable body, unexpected shape). Configuration and
    /// non-429 API errors are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::InvalidResponse(_) | Self::Serde(_) => true,
            Self::Http(err) => err.is_decode(),
            Self::Config(_) | Self::Api { .. } => false,
        }
    }
}
