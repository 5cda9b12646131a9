// fetcher.rs
use crate::scraper::{FetchError, RetryPolicy};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, REFERER};
use reqwest::Method;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

pub const DEFAULT_RENDER_API_URL: &str = "https://api.zenrows.com/v1/";

/// How the page HTML is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Plain GET with status-code retry.
    #[default]
    Plain,
    /// One request to a JS-rendering API, bounded by the render timeout.
    Render,
}

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub mode: FetchMode,
    pub request_timeout: Duration,
    pub render_timeout: Duration,
    pub render_api_url: String,
    pub render_api_key: Option<String>,
    pub retry: RetryPolicy,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            mode: FetchMode::Plain,
            request_timeout: Duration::from_secs(10),
            render_timeout: Duration::from_secs(300),
            render_api_url: DEFAULT_RENDER_API_URL.to_string(),
            render_api_key: None,
            retry: RetryPolicy::default(),
        }
    }
}

pub struct Fetcher {
    client: Client,
    config: FetcherConfig,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        // The client-wide timeout is the mode's ceiling; requests never outlive it.
        let timeout = match config.mode {
            FetchMode::Plain => config.request_timeout,
            FetchMode::Render => config.render_timeout,
        };

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        tracing::debug!(
            mode = ?config.mode,
            ?timeout,
            backoff = ?config.retry.schedule(),
            "fetcher ready"
        );
        Ok(Self { client, config })
    }

    pub fn mode(&self) -> FetchMode {
        self.config.mode
    }

    /// Raw HTML for `url`, or an error. Never partial content.
    pub fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let start = Instant::now();
        let html = match self.config.mode {
            FetchMode::Plain => self.fetch_plain(url)?,
            FetchMode::Render => self.fetch_rendered(url)?,
        };

        tracing::info!(
            mode = ?self.config.mode,
            bytes = html.len(),
            elapsed = ?start.elapsed(),
            "fetched {url}"
        );
        Ok(html)
    }

    fn fetch_plain(&self, url: &Url) -> Result<String, FetchError> {
        let policy = &self.config.retry;
        // Non-idempotent requests get a single shot.
        let max_retries = if policy.permits(&Method::GET) {
            policy.max_retries
        } else {
            0
        };

        let mut retry = 0;
        loop {
            let attempt_start = Instant::now();
            let outcome = self.try_fetch_plain(url);

            let retryable = match &outcome {
                Ok(_) => false,
                Err(FetchError::Status { status, .. }) => policy.is_retryable_status(*status),
                Err(FetchError::Network(e)) => e.is_connect() || e.is_timeout(),
                Err(_) => false,
            };

            if !retryable {
                return outcome;
            }

            if retry >= max_retries {
                return match outcome {
                    Err(FetchError::Status { url, status }) if retry > 0 => {
                        Err(FetchError::RetriesExhausted {
                            url,
                            status,
                            retries: retry,
                        })
                    }
                    other => other,
                };
            }

            let delay = policy.delay_for(retry);
            if let Err(e) = &outcome {
                tracing::warn!(
                    "attempt {} failed in {:?}: {e}; retrying in {:?}",
                    retry + 1,
                    attempt_start.elapsed(),
                    delay
                );
            }
            std::thread::sleep(delay);
            retry += 1;
        }
    }

    fn try_fetch_plain(&self, url: &Url) -> Result<String, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("da-DK,da;q=0.9,en;q=0.8"));

        let resp = self.client.get(url.as_str()).headers(headers).send()?;
        read_body(url, resp)
    }

    fn fetch_rendered(&self, url: &Url) -> Result<String, FetchError> {
        let api_key = self
            .config
            .render_api_key
            .as_deref()
            .ok_or(FetchError::MissingRenderKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));

        let mut params = HashMap::new();
        params.insert("url", url.to_string());
        params.insert("apikey", api_key.to_string());
        params.insert("js_render", "true".to_string());

        tracing::debug!(
            endpoint = %self.config.render_api_url,
            timeout = ?self.config.render_timeout,
            "requesting rendered page"
        );

        let resp = self
            .client
            .get(&self.config.render_api_url)
            .headers(headers)
            .query(&params)
            .send()
            .map_err(|e| self.render_error(e))?;

        let text = read_body(url, resp).map_err(|e| match e {
            FetchError::Network(e) => self.render_error(e),
            other => other,
        })?;

        // The rendering API reports its own failures as a JSON object with a `code`.
        if text.starts_with('{') {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&text) {
                if json.get("code").is_some() {
                    return Err(FetchError::RenderApi(text));
                }
            }
        }

        Ok(text)
    }

    fn render_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.config.render_timeout)
        } else {
            FetchError::Network(e)
        }
    }
}

fn read_body(url: &Url, resp: Response) -> Result<String, FetchError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(resp.text()?)
}
