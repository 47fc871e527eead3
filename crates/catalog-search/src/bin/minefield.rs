use catalog_search::{grid, init_tracing, TracingSink};
use clap::Parser;
use std::io::Read;

const DEMO: &str = "[[0,1,0],[0,0,1],[1,0,0]]";

/// Replaces each cell of a 0/1 grid with its adjacent mine count (mines become 9).
#[derive(Parser, Debug)]
#[command(name = "minefield", version)]
struct Args {
    /// Grid as a JSON array of rows, e.g. "[[0,1],[1,0]]". Read from stdin when omitted.
    grid: Option<String>,

    /// Run on the built-in 3x3 grid.
    #[arg(long, conflicts_with = "grid")]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();
    let text = match (args.demo, args.grid) {
        (true, _) => DEMO.to_string(),
        (false, Some(g)) => g,
        (false, None) => { let mut buf = String::new(); std::io::stdin().read_to_string(&mut buf)?; buf }
    };
    let input: Vec<Vec<i64>> = serde_json::from_str(&text)?;
    let out = grid::annotate(&input, &TracingSink)?;
    for row in out {
        println!("{}", row.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "));
    }
    Ok(())
}
