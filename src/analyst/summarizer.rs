use crate::analyst::{LlmClient, SummarizationError};
use crate::domain::ListingRecord;
use std::time::Instant;

pub const ANALYST_ROLE: &str = "real estate analyst";
pub const ANALYST_TASK: &str =
    "Analyze the following property data and provide key insights for potential buyers or investors.";

/// Free text returned by the model, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult(pub String);

impl AnalysisResult {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct Summarizer<L> {
    llm: L,
    role: String,
    task: String,
}

impl<L: LlmClient> Summarizer<L> {
    pub fn new(llm: L) -> Self {
        Self::with_prompt(llm, ANALYST_ROLE, ANALYST_TASK)
    }

    pub fn with_prompt(llm: L, role: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            llm,
            role: role.into(),
            task: task.into(),
        }
    }

    pub fn system_prompt(&self) -> String {
        format!("You are a {}. {}", self.role, self.task)
    }

    /// One completion request with the listings as compact JSON.
    pub fn analyze(&self, records: &[ListingRecord]) -> Result<AnalysisResult, SummarizationError> {
        let payload = serde_json::to_string(records)?;
        let start = Instant::now();

        tracing::info!(
            model = self.llm.model_name(),
            listings = records.len(),
            "Generating completion for role: {}",
            self.role
        );

        let text = self.llm.complete(&self.system_prompt(), &payload)?;

        tracing::info!(elapsed = ?start.elapsed(), chars = text.len(), "Completion generated");
        Ok(AnalysisResult(text))
    }
}
