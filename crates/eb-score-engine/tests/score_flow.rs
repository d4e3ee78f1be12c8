use std::sync::Arc;

use async_trait::async_trait;

use eb_score_engine::{
    ChallengeBrief, CompletionError, CompletionProvider, CompletionReply, CompletionRequest,
    GitHubClient, GitHubConfig, SubmissionScorer,
};

/// Replies with a fixed content payload, or a fixed failure.
enum StubProvider {
    Replying(String),
    Failing(u16),
    Garbled,
}

impl StubProvider {
    fn replying(content: &str) -> Self {
        Self::Replying(content.to_string())
    }

    fn failing(status: u16) -> Self {
        Self::Failing(status)
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn complete(
        &self,
        _request: CompletionRequest,
    ) -> Result<CompletionReply, CompletionError> {
        match self {
            Self::Replying(content) => Ok(CompletionReply {
                provider: "stub".to_string(),
                model: "stub-model".to_string(),
                content: content.clone(),
                usage_tokens: None,
            }),
            Self::Failing(429) => Err(CompletionError::RateLimited {
                status: 429,
                body: "rate limit exceeded".to_string(),
            }),
            Self::Failing(status) => Err(CompletionError::Api {
                status: *status,
                body: "upstream failure".to_string(),
            }),
            Self::Garbled => Err(CompletionError::InvalidResponse(
                "reply envelope was not decodable".to_string(),
            )),
        }
    }
}

/// GitHub client pointed at a closed local port, so the metadata fetch fails
/// fast and the pipeline exercises its content-unavailable path offline.
fn offline_github() -> GitHubClient {
    let config = GitHubConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        ..GitHubConfig::new()
    };
    GitHubClient::new(config).expect("build github client")
}

fn scorer_with(provider: StubProvider) -> SubmissionScorer {
    SubmissionScorer::with_parts(offline_github(), Some(Arc::new(provider)))
}

fn challenge() -> ChallengeBrief {
    ChallengeBrief::new("Todo App", "Build a todo list web application.")
}

#[tokio::test]
async fn no_credential_always_scores_with_mock() {
    let scorer = SubmissionScorer::with_parts(offline_github(), None);

    for _ in 0..5 {
        let result = scorer
            .score_submission("https://github.com/acme/widget", &challenge())
            .await;
        assert!(result.used_mock());
        let score = result.score().expect("mock score");
        assert!((62..=100).contains(&score.total));
    }
}

#[tokio::test]
async fn invalid_url_fails_without_fallback() {
    let scorer = scorer_with(StubProvider::replying("{}"));

    let result = scorer
        .score_submission("https://github.com/acme", &challenge())
        .await;
    assert!(!result.is_scored());
    assert!(result.error().is_some_and(|e| e.contains("invalid repository URL")));
}

#[tokio::test]
async fn valid_reply_is_clamped_and_summed() {
    let scorer = scorer_with(StubProvider::replying(
        r#"{"functionality": 95, "codeQuality": 25, "documentation": -4, "innovation": 8, "uiux": 9, "total": 3, "feedback": "nice"}"#,
    ));

    let result = scorer
        .score_submission("https://github.com/acme/widget", &challenge())
        .await;
    assert!(!result.used_mock());
    let score = result.score().expect("live score");
    assert_eq!(score.functionality, 30);
    assert_eq!(score.code_quality, 25);
    assert_eq!(score.documentation, 0);
    assert_eq!(score.total, 30 + 25 + 0 + 8 + 9);
    assert_eq!(score.feedback, "nice");
}

#[tokio::test]
async fn rate_limited_call_falls_back_to_mock() {
    let scorer = scorer_with(StubProvider::failing(429));

    let result = scorer
        .score_submission("https://github.com/acme/widget", &challenge())
        .await;
    assert!(result.used_mock());
    let score = result.score().expect("mock score");
    assert!((62..=100).contains(&score.total));
}

#[tokio::test]
async fn other_api_failures_surface_as_failure() {
    let scorer = scorer_with(StubProvider::failing(500));

    let result = scorer
        .score_submission("https://github.com/acme/widget", &challenge())
        .await;
    assert!(!result.is_scored());
    assert!(!result.used_mock());
    assert!(result.error().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn wrong_shape_reply_falls_back_to_mock() {
    let scorer = scorer_with(StubProvider::replying(r#"[10, 20, 30]"#));

    let result = scorer
        .score_submission("https://github.com/acme/widget", &challenge())
        .await;
    assert!(result.used_mock());
}

#[tokio::test]
async fn undecodable_reply_envelope_falls_back_to_mock() {
    let scorer = scorer_with(StubProvider::Garbled);

    let result = scorer
        .score_submission("https://github.com/acme/widget", &challenge())
        .await;
    assert!(result.used_mock());
    let score = result.score().expect("mock score");
    assert!((62..=100).contains(&score.total));
}

#[tokio::test]
async fn empty_object_reply_scores_zero_without_mock() {
    let scorer = scorer_with(StubProvider::replying("{}"));

    let result = scorer
        .score_submission("https://github.com/acme/widget", &challenge())
        .await;
    assert!(!result.used_mock());
    let score = result.score().expect("live score");
    assert_eq!(score.total, 0);
    assert_eq!(score.feedback, "No feedback provided");
}
