use std::time::Duration;
use thiserror::Error;

/// Failures while getting the raw page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP {status} from {url} after {retries} retries")]
    RetriesExhausted {
        url: String,
        status: u16,
        retries: u32,
    },

    #[error("Rendering API error: {0}")]
    RenderApi(String),

    #[error("RENDER_API_KEY is not set; rendering fetch unavailable")]
    MissingRenderKey,

    #[error("Rendering fetch exceeded {0:?}")]
    Timeout(Duration),
}

/// Failures that stop extraction outright. A missing field is not one of
/// them.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid selector for {field} ('{selector}'): {reason}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        reason: String,
    },

    #[error("Selector map {path}: {reason}")]
    SelectorFile { path: String, reason: String },
}
