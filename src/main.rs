use anyhow::{Context, Result};
use clap::Parser;
use csv::Writer;
use std::io::{self, Write};

use tilepath::dijkstra::Algorithm;
use tilepath::{edge_list, report, INFINITY};

#[derive(Parser, Debug)]
#[command(name = "tilepath")]
#[command(about = "Load an edge-list file and run dense Dijkstra from a source node id.", long_about = None)]
struct Cli {
    /// Path to the edge-list file (first line: edge count, then "node1 node2 distance" lines)
    #[arg(short, long)]
    graph: String,

    /// Source node id to run from (1-based)
    #[arg(short, long)]
    source: usize,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Scan)]
    algorithm: Algorithm,

    /// Also print the distances as a grid of this width
    #[arg(long)]
    grid_width: Option<usize>,

    /// Output CSV (node_id, distance). If omitted, prints the distance table to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable nodes in the CSV as "inf"
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

fn run(cli: Cli) -> Result<()> {
    let graph = edge_list::read_graph(&cli.graph)
        .with_context(|| format!("loading {}", &cli.graph))?;
    let node_count = graph.node_count().unwrap_or(0);

    let dist = cli
        .algorithm
        .run(&graph, cli.source)
        .with_context(|| format!("searching from node {}", cli.source))?;

    let reachable = dist[1..=node_count].iter().filter(|&&d| d < INFINITY).count();
    tracing::info!(source = cli.source, nodes = node_count, reachable, "search done");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(out_path) = cli.out {
        let mut wtr =
            Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        let written =
            report::write_distances_csv(&mut wtr, &dist, node_count, cli.include_unreachable)?;
        writeln!(out, "Wrote distances for {} nodes to {}", written, out_path)?;
    } else {
        report::write_distances(&mut out, &dist, node_count)?;
    }

    if let Some(width) = cli.grid_width.filter(|&w| w > 0) {
        let height = node_count.div_ceil(width);
        report::write_grid(&mut out, width, height, &dist)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tilepath::init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        tracing::error!("{:#}", err);
        return Err(err);
    }
    Ok(())
}
