/// One system instruction plus one user instruction. Providers always ask
/// the endpoint for a JSON-object reply.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone)]
pub struct CompletionReply {
    pub provider: String,
    pub model: String,
    pub content: String,
    pub usage_tokens: Option<u64>,
}
