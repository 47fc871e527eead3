//! Best-in-genre search over a paginated TV series catalog, plus a grid adjacency counter.

pub mod aggregator;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fetcher;
pub mod grid;

pub use aggregator::{AggregationState, BestInGenre, GenreQuery};
pub use config::SearchConfig;
pub use diagnostics::{DiagnosticSink, NoopSink, RecordingSink, TracingSink};
pub use error::{CatalogError, FetchFailure, GridError, Result};
pub use fetcher::{HttpPageFetcher, PageFetcher};

/// Validates `genre`, then searches the catalog at `cfg.base_url` over HTTP.
pub fn find_best_in_genre(genre: Option<&str>, cfg: &SearchConfig, sink: &dyn DiagnosticSink) -> anyhow::Result<Option<String>> {
    let query = GenreQuery::parse(genre).map_err(|e| { sink.error(&e.to_string()); e })?;
    let fetcher = HttpPageFetcher::from_config(cfg)?;
    Ok(BestInGenre::new(fetcher, sink).with_top_n(cfg.top_n).search(&query))
}

/// Installs the `tracing` subscriber used by the binaries.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,catalog_search=debug".into());
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .try_init();
}
