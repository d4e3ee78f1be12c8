use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("invalid repository URL: {0}")]
    InvalidUrl(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("GitHub API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}
