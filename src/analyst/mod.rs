mod analyst_error;
mod llm;
mod openai;
mod summarizer;

pub use analyst_error::SummarizationError;
pub use llm::LlmClient;
pub use openai::{OpenAiClient, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
pub use summarizer::{AnalysisResult, Summarizer};
