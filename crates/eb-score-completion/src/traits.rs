use async_trait::async_trait;

use crate::error::CompletionError;
use crate::types::{CompletionReply, CompletionRequest};

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionReply, CompletionError>;
}
