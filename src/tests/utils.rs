use crate::analyst::{LlmClient, SummarizationError};
use crate::domain::{ListingRecord, MISSING_FIELD};
use crate::scraper::{FetchMode, Fetcher, FetcherConfig, RetryPolicy};
use std::time::Duration;

/// One complete listing, one without price and energy mark.
pub const TWO_LISTINGS_HTML: &str = r#"<!DOCTYPE html>
<html lang="da">
<head><meta charset="utf-8"><title>Nye boliger</title></head>
<body>
  <div class="search-results">
    <div class="search-list-item">
      <div class="property-type">Villa</div>
      <div class="rooms">4</div>
      <div class="size">120 m²</div>
      <div class="price">2.500.000</div>
      <div class="address">Main St 1</div>
      <div class="energy-mark">A</div>
      <div class="listing-date">2024-01-01</div>
    </div>
    <div class="search-list-item">
      <div class="property-type">Ejerlejlighed</div>
      <div class="rooms">2</div>
      <div class="size">68 m²</div>
      <div class="address">Nørrebrogade 12</div>
      <div class="listing-date">2024-02-15</div>
    </div>
  </div>
</body>
</html>"#;

pub fn expected_two_listings() -> Vec<ListingRecord> {
    let full = ["Villa", "4", "120 m²", "2.500.000", "Main St 1", "A", "2024-01-01"];
    let partial = [
        "Ejerlejlighed",
        "2",
        "68 m²",
        MISSING_FIELD,
        "Nørrebrogade 12",
        MISSING_FIELD,
        "2024-02-15",
    ];
    vec![
        ListingRecord::from(full.map(String::from)),
        ListingRecord::from(partial.map(String::from)),
    ]
}

/// Plain fetcher with millisecond backoff so retry tests stay fast.
pub fn plain_fetcher(backoff_base: Duration) -> Fetcher {
    Fetcher::new(FetcherConfig {
        mode: FetchMode::Plain,
        retry: RetryPolicy::default().with_backoff_base(backoff_base),
        ..FetcherConfig::default()
    })
    .unwrap()
}

pub fn render_fetcher(endpoint: String, api_key: Option<&str>, timeout: Duration) -> Fetcher {
    Fetcher::new(FetcherConfig {
        mode: FetchMode::Render,
        render_api_url: endpoint,
        render_api_key: api_key.map(String::from),
        render_timeout: timeout,
        ..FetcherConfig::default()
    })
    .unwrap()
}

/// The blocking client must live and die off the async runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

/// Canned completion backend.
pub struct StubLlm {
    reply: Option<String>,
}

impl StubLlm {
    pub fn answering(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

impl LlmClient for StubLlm {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, SummarizationError> {
        self.reply.clone().ok_or(SummarizationError::Api {
            status: 429,
            body: "rate limit exceeded".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "stub"
    }
}

pub fn count_files(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}
