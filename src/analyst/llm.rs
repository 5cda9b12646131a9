use crate::analyst::SummarizationError;

/// A chat-completion backend. One system message, one user message, one
/// text answer back.
pub trait LlmClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, SummarizationError>;

    fn model_name(&self) -> &str;
}

impl<T: LlmClient + ?Sized> LlmClient for &T {
    fn complete(&self, system: &str, user: &str) -> Result<String, SummarizationError> {
        (**self).complete(system, user)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
