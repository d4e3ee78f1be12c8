use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::config::GitHubConfig;
use crate::error::GitHubError;
use crate::types::{
    FILE_LIST_FETCH_CAP, README_MAX_CHARS, RepoRef, RepositoryMetadata, truncate_chars,
};

const RAW_CONTENT_ACCEPT: &str = "application/vnd.github.v3.raw";
const MANIFEST_PATH: &str = "package.json";

#[derive(Clone)]
pub struct GitHubClient {
    config: GitHubConfig,
    client: Client,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { config, client })
    }

    /// Aggregates repository metadata with a partial-success policy: the
    /// summary fetch is required, while README, file tree, and dependency
    /// manifest each degrade to empty/absent on their own failure.
    pub async fn fetch_repository(
        &self,
        repo: &RepoRef,
    ) -> Result<RepositoryMetadata, GitHubError> {
        let summary = self.fetch_summary(repo).await?;

        let readme = match self.fetch_readme(repo).await {
            Ok(text) => truncate_chars(&text, README_MAX_CHARS),
            Err(err) => {
                warn!(owner = %repo.owner, repo = %repo.repo, error = %err, "README fetch failed");
                String::new()
            }
        };

        let files = match self.fetch_file_tree(repo, &summary.default_branch).await {
            Ok(files) => files,
            Err(err) => {
                warn!(owner = %repo.owner, repo = %repo.repo, error = %err, "file tree fetch failed");
                Vec::new()
            }
        };

        let manifest = match self.fetch_manifest(repo).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(owner = %repo.owner, repo = %repo.repo, error = %err, "manifest fetch failed");
                None
            }
        };

        Ok(RepositoryMetadata {
            name: summary.name,
            description: summary.description.unwrap_or_default(),
            language: summary.language.unwrap_or_else(|| "Unknown".to_string()),
            topics: summary.topics,
            stars: summary.stargazers_count,
            forks: summary.forks_count,
            default_branch: summary.default_branch,
            readme,
            files,
            manifest,
            created_at: summary.created_at.unwrap_or_default(),
            updated_at: summary.updated_at.unwrap_or_default(),
        })
    }

    async fn fetch_summary(&self, repo: &RepoRef) -> Result<RepoSummary, GitHubError> {
        let res = self.get(self.repo_url(repo, "")).send().await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GitHubError::Api { status, body });
        }
        Ok(res.json().await?)
    }

    async fn fetch_readme(&self, repo: &RepoRef) -> Result<String, GitHubError> {
        let res = self
            .get(self.repo_url(repo, "/readme"))
            .header(ACCEPT, RAW_CONTENT_ACCEPT)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GitHubError::Api { status, body });
        }
        Ok(res.text().await?)
    }

    async fn fetch_file_tree(
        &self,
        repo: &RepoRef,
        branch: &str,
    ) -> Result<Vec<String>, GitHubError> {
        let res = self
            .get(self.repo_url(repo, &format!("/git/trees/{branch}?recursive=1")))
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GitHubError::Api { status, body });
        }

        let parsed: TreeResponse = res.json().await?;
        Ok(blob_paths(parsed.tree))
    }

    async fn fetch_manifest(&self, repo: &RepoRef) -> Result<Value, GitHubError> {
        let res = self
            .get(self.repo_url(repo, &format!("/contents/{MANIFEST_PATH}")))
            .header(ACCEPT, RAW_CONTENT_ACCEPT)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GitHubError::Api { status, body });
        }

        let text = res.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    fn repo_url(&self, repo: &RepoRef, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.config.base_url.trim_end_matches('/'),
            repo.owner,
            repo.repo,
            suffix
        )
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        let req = self.client.get(url);
        match &self.config.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

/// Blob paths from a recursive tree listing, capped at the fetch limit.
fn blob_paths(entries: Vec<TreeEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| entry.kind == "blob")
        .map(|entry| entry.path)
        .take(FILE_LIST_FETCH_CAP)
        .collect()
}

#[derive(Debug, Deserialize)]
struct RepoSummary {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default = "default_branch")]
    default_branch: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

fn default_branch() -> String {
    "main".to_string()
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeEntry>,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}
