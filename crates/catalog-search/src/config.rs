use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jsonmock.hackerrank.com/api/tvseries";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub base_url: String,
    /// Per-request timeout handed to the page fetcher.
    pub timeout: Duration,
    pub top_n: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.into(), timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS), top_n: catalog_schema::DEFAULT_TOP_N }
    }
}

impl SearchConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self { self.base_url = url.into(); self }
    pub fn with_timeout(mut self, timeout: Duration) -> Self { self.timeout = timeout; self }
    pub fn with_top_n(mut self, n: usize) -> Self { self.top_n = n; self }
}
