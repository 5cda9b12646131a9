use reqwest::Method;
use std::time::Duration;

/// Status-code retry with exponential backoff for the plain fetch.
///
/// The delay before retry `n` (0-based) is `backoff_base * 2^n`, so the
/// default gives 1s, 2s, 4s, 8s, 16s. No jitter.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base: Duration,
    pub retry_statuses: Vec<u16>,
    pub allowed_methods: Vec<Method>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_base: Duration::from_secs(1),
            retry_statuses: vec![429, 500, 502, 503, 504],
            allowed_methods: vec![Method::GET, Method::HEAD, Method::OPTIONS],
        }
    }
}

impl RetryPolicy {
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }

    pub fn permits(&self, method: &Method) -> bool {
        self.allowed_methods.contains(method)
    }

    pub fn delay_for(&self, retry: u32) -> Duration {
        // 2^31 seconds is already absurd; clamp the shift instead of overflowing.
        self.backoff_base.saturating_mul(1u32 << retry.min(31))
    }

    /// Every delay the policy would sleep through, in order.
    pub fn schedule(&self) -> Vec<Duration> {
        (0..self.max_retries).map(|n| self.delay_for(n)).collect()
    }
}
