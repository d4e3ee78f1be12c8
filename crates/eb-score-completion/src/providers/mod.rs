pub mod groq;
pub mod openai_compatible;

pub use groq::GroqCompletionProvider;
pub use openai_compatible::OpenAiCompatibleCompletionProvider;
