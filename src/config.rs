use crate::analyst::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
use crate::scraper::DEFAULT_RENDER_API_URL;
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "property_scraper.log";

/// Settings read once at startup from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub render_api_key: Option<String>,
    pub render_api_url: String,
    pub render_timeout: Duration,
    pub log_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let render_timeout = match non_empty("RENDER_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .context("RENDER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => Duration::from_secs(300),
        };

        Ok(Self {
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_base_url: non_empty("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: non_empty("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            render_api_key: non_empty("RENDER_API_KEY"),
            render_api_url: non_empty("RENDER_API_URL")
                .unwrap_or_else(|| DEFAULT_RENDER_API_URL.to_string()),
            render_timeout,
            log_file: non_empty("PROPERTY_ANALYST_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }
}
