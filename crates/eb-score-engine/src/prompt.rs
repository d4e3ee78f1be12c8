use eb_score_github::{RepoRef, RepositoryMetadata};

use crate::types::ChallengeBrief;

/// At most this many fetched file paths are embedded in the prompt.
pub const PROMPT_FILE_LIST_CAP: usize = 30;

pub const SYSTEM_PROMPT: &str = "You are an expert code reviewer and technical evaluator. \
You analyze GitHub repositories and provide detailed, fair scoring based on multiple criteria. \
Always respond with valid JSON only.";

/// Fixed evaluation rubric embedded verbatim in every prompt. A design
/// constant: scoring stays comparable across challenges only if every
/// submission is graded against identical rules.
const RUBRIC: &str = r#"**YOUR TASK:**
Carefully analyze if this repository matches the challenge requirements. Be STRICT and HONEST.

**CRITICAL EVALUATION RULES:**
1. If the repository is about a COMPLETELY DIFFERENT topic (e.g., Android app when challenge asks for web app), give VERY LOW scores (0-20 total)
2. If the repository name, description, or files don't match the challenge at all, score should be 0-10 total
3. If README doesn't mention the challenge topic, deduct major points
4. If the primary language doesn't match what's expected for the challenge, deduct points
5. Only give high scores (70+) if there's clear evidence the project addresses the challenge

**Scoring Criteria (Total: 100 points):**

1. **Functionality (0-30 points):**
   - Does it actually implement the challenge requirements?
   - Are the required features present?
   - Does the code/files match what's expected?
   - **Give 0-5 if completely unrelated to challenge**

2. **Code Quality (0-30 points):**
   - Is the code relevant to the challenge?
   - Good architecture for THIS specific challenge?
   - **Give 0-5 if wrong technology/language**

3. **Documentation (0-20 points):**
   - Does README explain the challenge solution?
   - Does it mention the challenge at all?
   - **Give 0 if README is about different project**

4. **Innovation (0-10 points):**
   - Creative solutions TO THIS CHALLENGE?
   - **Give 0 if not related to challenge**

5. **UI/UX (0-10 points):**
   - Relevant to challenge requirements?
   - **Give 0 if challenge requires UI but repo has none**

**EXAMPLES OF MISMATCHES (should score 0-15 total):**
- Challenge: "AI Meme Generator" -> Repo: Android navigation app
- Challenge: "Todo App" -> Repo: Machine learning model
- Challenge: "React Dashboard" -> Repo: Python script
- Challenge: "E-commerce site" -> Repo: Game development

**Response Format (JSON only):**
{
  "functionality": <number 0-30>,
  "codeQuality": <number 0-30>,
  "documentation": <number 0-20>,
  "innovation": <number 0-10>,
  "uiux": <number 0-10>,
  "feedback": "<HONEST feedback explaining why scores are low if repository doesn't match challenge, or praising if it does match>"
}

**BE BRUTALLY HONEST.** If the repository is completely unrelated to the challenge, say so clearly in feedback and give very low scores.

Respond with ONLY the JSON object, no additional text."#;

/// Formats the full user instruction for one scoring call. Pure string
/// assembly: the only branch picks between the fetched-content block and
/// the content-unavailable block.
pub fn scoring_prompt(
    challenge: &ChallengeBrief,
    repo: &RepoRef,
    metadata: Option<&RepositoryMetadata>,
) -> String {
    let content_section = match metadata {
        Some(data) => available_section(data),
        None => unavailable_section(repo),
    };

    format!(
        "You are evaluating a GitHub repository submission for a coding challenge.\n\n\
**CHALLENGE REQUIREMENTS:**\n\
**Title:** {title}\n\
**Description:**\n{description}\n\n\
{content_section}\n\n\
{RUBRIC}",
        title = challenge.title,
        description = challenge.description,
    )
}

fn available_section(data: &RepositoryMetadata) -> String {
    let description = if data.description.is_empty() {
        "No description"
    } else {
        data.description.as_str()
    };
    let topics = if data.topics.is_empty() {
        "None".to_string()
    } else {
        data.topics.join(", ")
    };
    let readme = if data.readme.is_empty() {
        "No README found"
    } else {
        data.readme.as_str()
    };
    let files = data
        .files
        .iter()
        .take(PROMPT_FILE_LIST_CAP)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    let files = if files.is_empty() {
        "No files found".to_string()
    } else {
        files
    };
    let dependencies = match &data.manifest {
        Some(manifest) => {
            let deps = manifest
                .get("dependencies")
                .cloned()
                .unwrap_or_else(|| serde_json::json!({}));
            serde_json::to_string_pretty(&deps).unwrap_or_else(|_| "{}".to_string())
        }
        None => "No package.json found".to_string(),
    };

    format!(
        "**ACTUAL REPOSITORY ANALYSIS:**\n\n\
**Repository Name:** {name}\n\
**Description:** {description}\n\
**Primary Language:** {language}\n\
**Topics/Tags:** {topics}\n\
**Stars:** {stars} | **Forks:** {forks}\n\n\
**README Content (first 3000 chars):**\n{readme}\n\n\
**File Structure (key files):**\n{files}\n\n\
**Dependencies (from package.json):**\n{dependencies}\n\n\
**Repository Age:**\n\
Created: {created}\n\
Last Updated: {updated}",
        name = data.name,
        language = data.language,
        stars = data.stars,
        forks = data.forks,
        created = date_part(&data.created_at),
        updated = date_part(&data.updated_at),
    )
}

fn unavailable_section(repo: &RepoRef) -> String {
    format!(
        "**WARNING:** Could not fetch repository content. Repository may be private or deleted.\n\
**Repository URL:** {}",
        repo.html_url()
    )
}

fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> RepositoryMetadata {
        RepositoryMetadata {
            name: "widget".to_string(),
            description: "A widget factory".to_string(),
            language: "Rust".to_string(),
            topics: vec!["cli".to_string(), "tools".to_string()],
            stars: 42,
            forks: 7,
            default_branch: "main".to_string(),
            readme: "# Widget\nBuilds widgets.".to_string(),
            files: (0..50).map(|i| format!("src/mod_{i}.rs")).collect(),
            manifest: Some(serde_json::json!({"dependencies": {"react": "^18.0.0"}})),
            created_at: "2024-03-01T12:00:00Z".to_string(),
            updated_at: "2025-06-15T08:30:00Z".to_string(),
        }
    }

    fn challenge() -> ChallengeBrief {
        ChallengeBrief::new("AI Meme Generator", "Build a meme generator powered by an LLM.")
    }

    fn repo() -> RepoRef {
        RepoRef {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
        }
    }

    #[test]
    fn prompt_embeds_rubric_and_challenge() {
        let prompt = scoring_prompt(&challenge(), &repo(), Some(&metadata()));
        assert!(prompt.contains("**Title:** AI Meme Generator"));
        assert!(prompt.contains("**Scoring Criteria (Total: 100 points):**"));
        assert!(prompt.contains("Respond with ONLY the JSON object"));
        assert!(prompt.contains("**EXAMPLES OF MISMATCHES"));
    }

    #[test]
    fn file_list_is_capped_at_thirty_in_the_prompt() {
        let prompt = scoring_prompt(&challenge(), &repo(), Some(&metadata()));
        assert!(prompt.contains("src/mod_29.rs"));
        assert!(!prompt.contains("src/mod_30.rs"));
    }

    #[test]
    fn missing_metadata_uses_unavailable_block() {
        let prompt = scoring_prompt(&challenge(), &repo(), None);
        assert!(prompt.contains("Repository may be private or deleted"));
        assert!(prompt.contains("https://github.com/acme/widget"));
        assert!(!prompt.contains("**ACTUAL REPOSITORY ANALYSIS:**"));
        // The rubric is embedded even without content.
        assert!(prompt.contains("**Scoring Criteria (Total: 100 points):**"));
    }

    #[test]
    fn sparse_metadata_uses_placeholders() {
        let mut data = metadata();
        data.description = String::new();
        data.readme = String::new();
        data.files = Vec::new();
        data.manifest = None;
        data.topics = Vec::new();

        let prompt = scoring_prompt(&challenge(), &repo(), Some(&data));
        assert!(prompt.contains("**Description:** No description"));
        assert!(prompt.contains("No README found"));
        assert!(prompt.contains("No files found"));
        assert!(prompt.contains("No package.json found"));
        assert!(prompt.contains("**Topics/Tags:** None"));
    }

    #[test]
    fn manifest_without_dependencies_shows_empty_object() {
        let mut data = metadata();
        data.manifest = Some(serde_json::json!({"name": "widget"}));
        let prompt = scoring_prompt(&challenge(), &repo(), Some(&data));
        assert!(prompt.contains("**Dependencies (from package.json):**\n{}"));
    }

    #[test]
    fn timestamps_embed_date_part_only() {
        let prompt = scoring_prompt(&challenge(), &repo(), Some(&metadata()));
        assert!(prompt.contains("Created: 2024-03-01\n"));
        assert!(prompt.contains("Last Updated: 2025-06-15"));
    }
}
