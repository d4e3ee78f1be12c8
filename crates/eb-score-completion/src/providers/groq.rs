use crate::config::CompletionConfig;
use crate::error::CompletionError;
use crate::providers::openai_compatible::OpenAiCompatibleCompletionProvider;
use crate::traits::CompletionProvider;
use crate::types::{CompletionReply, CompletionRequest};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai";
pub const GROQ_DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Clone)]
pub struct GroqCompletionProvider {
    inner: OpenAiCompatibleCompletionProvider,
}

impl GroqCompletionProvider {
    pub fn new(mut config: CompletionConfig) -> Result<Self, CompletionError> {
        if config.base_url.trim().is_empty() || config.base_url == "https://api.openai.com" {
            config.base_url = GROQ_BASE_URL.to_string();
        }
        if config.model.trim().is_empty() {
            config.model = GROQ_DEFAULT_MODEL.to_string();
        }
        Ok(Self {
            inner: OpenAiCompatibleCompletionProvider::new(config)?,
        })
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GroqCompletionProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionReply, CompletionError> {
        let mut reply = self.inner.complete(request).await?;
        reply.provider = self.name().to_string();
        Ok(reply)
    }
}
