use thiserror::Error;

/// Anything that keeps the completion API from giving us an analysis.
/// None of these are retried.
#[derive(Debug, Error)]
pub enum SummarizationError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Could not encode listings: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Completion API returned no content")]
    EmptyResponse,
}
