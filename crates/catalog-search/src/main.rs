use catalog_search::{find_best_in_genre, init_tracing, SearchConfig, TracingSink};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::process::ExitCode;
use std::time::Duration;

/// Finds the highest-rated TV series in a genre.
#[derive(Parser, Debug)]
#[command(name = "best-in-genre", version)]
struct Args {
    /// Genre to search for, e.g. "Action".
    genre: Option<String>,

    #[arg(long, env = "CATALOG_BASE_URL", default_value = catalog_search::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-page request timeout.
    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = catalog_search::config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(long = "top", env = "CATALOG_TOP_N", default_value_t = catalog_schema::DEFAULT_TOP_N)]
    top_n: usize,

    /// Print Prometheus metrics to stderr after the run.
    #[arg(long)]
    print_metrics: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing();
    let prom = if args.print_metrics { Some(PrometheusBuilder::new().install_recorder()?) } else { None };

    tracing::info!(genre = ?args.genre, base_url = %args.base_url, "best_in_genre_start");
    let cfg = SearchConfig::default()
        .with_base_url(args.base_url)
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_top_n(args.top_n);
    let res = find_best_in_genre(args.genre.as_deref(), &cfg, &TracingSink)?;

    let genre = args.genre.unwrap_or_default();
    let code = match res {
        Some(name) => { println!("Best in genre '{genre}': {name}"); ExitCode::SUCCESS }
        None => { println!("No result or error (check logs)."); ExitCode::FAILURE }
    };
    if let Some(handle) = prom { eprintln!("{}", handle.render()); }
    Ok(code)
}
