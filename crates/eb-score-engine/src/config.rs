pub const ENV_GROQ_API_KEY: &str = "ELITEBUILDERS_GROQ_API_KEY";
pub const ENV_COMPLETION_MODEL: &str = "ELITEBUILDERS_COMPLETION_MODEL";
pub const ENV_COMPLETION_BASE_URL: &str = "ELITEBUILDERS_COMPLETION_BASE_URL";
pub const ENV_GITHUB_TOKEN: &str = "ELITEBUILDERS_GITHUB_TOKEN";

/// Scorer configuration. Every field is optional: a missing completion
/// credential silently activates the mock scoring path instead of failing.
#[derive(Debug, Clone, Default)]
pub struct ScorerConfig {
    pub groq_api_key: Option<String>,
    pub completion_model: Option<String>,
    pub completion_base_url: Option<String>,
    pub github_token: Option<String>,
}

impl ScorerConfig {
    pub fn from_env() -> Self {
        Self {
            groq_api_key: env_value(ENV_GROQ_API_KEY),
            completion_model: env_value(ENV_COMPLETION_MODEL),
            completion_base_url: env_value(ENV_COMPLETION_BASE_URL),
            github_token: env_value(ENV_GITHUB_TOKEN),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
