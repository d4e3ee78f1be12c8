use std::sync::Arc;

use tracing::{debug, warn};

use eb_score_completion::{
    build_completion_provider, CompletionConfig, CompletionProvider, CompletionProviderConfig,
    CompletionRequest,
};
use eb_score_core::{mock_score, RawScoreReply, ScoreBreakdown, ScoringResult};
use eb_score_github::{GitHubClient, GitHubConfig, RepoRef};

use crate::config::ScorerConfig;
use crate::error::EngineError;
use crate::prompt::{scoring_prompt, SYSTEM_PROMPT};
use crate::types::ChallengeBrief;

/// Scores one submission per call: fetch metadata, compose the prompt, ask
/// the completion provider, validate the reply. Holds no state across calls;
/// every invocation is self-contained and idempotent by replacement.
pub struct SubmissionScorer {
    github: GitHubClient,
    completion: Option<Arc<dyn CompletionProvider>>,
}

impl SubmissionScorer {
    pub fn new(config: &ScorerConfig) -> Result<Self, EngineError> {
        let mut github_config = GitHubConfig::new();
        if let Some(token) = &config.github_token {
            github_config = github_config.with_token(token);
        }
        let github = GitHubClient::new(github_config)?;

        let completion = match &config.groq_api_key {
            Some(key) => {
                let mut completion_config =
                    CompletionConfig::new(key, config.completion_model.clone().unwrap_or_default());
                if let Some(base_url) = &config.completion_base_url {
                    completion_config.base_url = base_url.clone();
                }
                Some(build_completion_provider(CompletionProviderConfig::Groq(
                    completion_config,
                ))?)
            }
            None => None,
        };

        Ok(Self { github, completion })
    }

    pub fn from_env() -> Result<Self, EngineError> {
        Self::new(&ScorerConfig::from_env())
    }

    /// Assembles a scorer from prebuilt parts. `None` for the completion
    /// provider pins every call to the mock path.
    pub fn with_parts(
        github: GitHubClient,
        completion: Option<Arc<dyn CompletionProvider>>,
    ) -> Self {
        Self { github, completion }
    }

    /// One scoring call. Never returns an `Err`: failures come back inside
    /// the result, and recoverable completion failures (rate limiting, a
    /// reply that is not a score object) fall back to the mock scorer.
    pub async fn score_submission(
        &self,
        repo_url: &str,
        challenge: &ChallengeBrief,
    ) -> ScoringResult {
        let Some(provider) = &self.completion else {
            debug!("no completion credential configured, using mock scoring");
            return ScoringResult::mocked(mock_score());
        };

        let repo = match RepoRef::parse(repo_url) {
            Ok(repo) => repo,
            Err(err) => return ScoringResult::failed(err.to_string()),
        };

        let metadata = match self.github.fetch_repository(&repo).await {
            Ok(metadata) => Some(metadata),
            Err(err) => {
                warn!(
                    owner = %repo.owner,
                    repo = %repo.repo,
                    error = %err,
                    "metadata fetch failed, scoring without repository content"
                );
                None
            }
        };

        let request = CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: scoring_prompt(challenge, &repo, metadata.as_ref()),
        };

        match provider.complete(request).await {
            Ok(reply) => match RawScoreReply::from_json_str(&reply.content) {
                Ok(raw) => ScoringResult::scored(ScoreBreakdown::from_raw(raw)),
                Err(err) => {
                    warn!(error = %err, "completion reply was not a score object, using mock scoring");
                    ScoringResult::mocked(mock_score())
                }
            },
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "recoverable completion failure, using mock scoring");
                ScoringResult::mocked(mock_score())
            }
            Err(err) => ScoringResult::failed(err.to_string()),
        }
    }
}
