use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl GitHubConfig {
    pub fn new() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            user_agent: "eb-score".to_string(),
        }
    }

    /// Unauthenticated calls work but hit low rate limits; a token raises them.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self::new()
    }
}
