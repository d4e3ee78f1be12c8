use thiserror::Error;

use eb_score_completion::CompletionError;
use eb_score_github::GitHubError;

/// Construction-time failures. Scoring itself never returns an `Err`; it
/// reports failures inside `ScoringResult`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}
