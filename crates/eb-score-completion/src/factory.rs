use std::sync::Arc;

use crate::config::CompletionProviderConfig;
use crate::error::CompletionError;
use crate::providers::{GroqCompletionProvider, OpenAiCompatibleCompletionProvider};
use crate::traits::CompletionProvider;

pub fn build_completion_provider(
    cfg: CompletionProviderConfig,
) -> Result<Arc<dyn CompletionProvider>, CompletionError> {
    match cfg {
        CompletionProviderConfig::OpenAiCompatible(c) => {
            Ok(Arc::new(OpenAiCompatibleCompletionProvider::new(c)?))
        }
        CompletionProviderConfig::Groq(c) => Ok(Arc::new(GroqCompletionProvider::new(c)?)),
    }
}
