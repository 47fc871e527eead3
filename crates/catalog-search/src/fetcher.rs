use catalog_schema::Page;
use metrics::{counter, histogram};
use std::time::{Duration, Instant};

use crate::config::SearchConfig;
use crate::error::FetchFailure;

/// One attempt per call, no retry. Any failure ends the search.
pub trait PageFetcher {
    fn fetch(&self, page: u32) -> Result<Page, FetchFailure>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, page: u32) -> Result<Page, FetchFailure> { (**self).fetch(page) }
}

/// Blocking HTTP fetcher for `GET {base_url}?page=N`.
pub struct HttpPageFetcher { client: reqwest::blocking::Client, base_url: String, timeout: Duration }

impl HttpPageFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.into(), timeout })
    }
    pub fn from_config(cfg: &SearchConfig) -> anyhow::Result<Self> { Self::new(cfg.base_url.clone(), cfg.timeout) }

    fn attempt(&self, page: u32) -> Result<Page, FetchFailure> {
        let resp = self.client.get(&self.base_url).query(&[("page", page)]).send()
            .map_err(|e| FetchFailure::Transport { page, message: e.to_string() })?;
        let status = resp.status();
        if !status.is_success() { return Err(FetchFailure::Status { page, status: status.as_u16() }); }
        let body = resp.text().map_err(|e| FetchFailure::Transport { page, message: e.to_string() })?;
        serde_json::from_str::<Page>(&body).map_err(|e| FetchFailure::Decode { page, message: e.to_string() })
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch(&self, page: u32) -> Result<Page, FetchFailure> {
        let span = tracing::debug_span!("fetch_page", page, url = %self.base_url);
        let _e = span.enter();
        tracing::debug!(timeout_ms = self.timeout.as_millis() as u64, "page_request");
        let start = Instant::now();
        let res = self.attempt(page);
        histogram!("catalog_page_fetch_seconds", start.elapsed().as_secs_f64());
        match &res {
            Ok(p) => { counter!("catalog_pages_fetched_total", 1); tracing::debug!(items = p.data.len(), total_pages = p.total_pages, "page_ok"); }
            Err(e) => { counter!("catalog_fetch_failures_total", 1, "kind" => e.kind()); tracing::debug!(error = %e, "page_failed"); }
        }
        res
    }
}
