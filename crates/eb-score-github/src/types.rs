use reqwest::Url;
use serde_json::Value;

use crate::error::GitHubError;

/// README text embedded in a prompt is capped to bound prompt size.
pub const README_MAX_CHARS: usize = 3000;

/// At most this many blob paths are kept from the recursive tree fetch.
pub const FILE_LIST_FETCH_CAP: usize = 50;

/// Owner/repo pair extracted from a GitHub-style URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Decomposes a repository URL into owner and repo via path-segment
    /// split. Fails when the URL does not parse or carries fewer than two
    /// non-empty path segments. Purely syntactic; never touches the network.
    pub fn parse(repo_url: &str) -> Result<Self, GitHubError> {
        let url =
            Url::parse(repo_url).map_err(|_| GitHubError::InvalidUrl(repo_url.to_string()))?;

        let mut segments = url
            .path_segments()
            .ok_or_else(|| GitHubError::InvalidUrl(repo_url.to_string()))?
            .filter(|segment| !segment.is_empty());

        match (segments.next(), segments.next()) {
            (Some(owner), Some(repo)) => Ok(Self {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(GitHubError::InvalidUrl(repo_url.to_string())),
        }
    }

    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

/// Repository metadata aggregated from the GitHub API.
///
/// Request-scoped; never cached or persisted. The summary fields are always
/// present, while `readme`, `files`, and `manifest` degrade independently to
/// empty/absent when their fetches fail.
#[derive(Debug, Clone)]
pub struct RepositoryMetadata {
    pub name: String,
    pub description: String,
    pub language: String,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub default_branch: String,
    pub readme: String,
    pub files: Vec<String>,
    pub manifest: Option<Value>,
    pub created_at: String,
    pub updated_at: String,
}

pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
