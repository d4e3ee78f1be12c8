pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod types;

pub use config::*;
pub use engine::SubmissionScorer;
pub use error::EngineError;
pub use prompt::{scoring_prompt, PROMPT_FILE_LIST_CAP, SYSTEM_PROMPT};
pub use types::ChallengeBrief;

pub use eb_score_completion::{
    build_completion_provider, CompletionConfig, CompletionError, CompletionProvider,
    CompletionProviderConfig, CompletionReply, CompletionRequest,
};
pub use eb_score_core::{
    mock_score, RawScoreReply, ScoreBreakdown, ScoringResult, DEFAULT_FEEDBACK, MOCK_FEEDBACK,
};
pub use eb_score_github::{
    GitHubClient, GitHubConfig, GitHubError, RepoRef, RepositoryMetadata, FILE_LIST_FETCH_CAP,
    README_MAX_CHARS,
};
