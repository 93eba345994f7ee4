use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use tilepath::dijkstra::Algorithm;
use tilepath::{edge_list, report, TileFloor};

#[derive(Parser, Debug)]
#[command(name = "floor")]
#[command(about = "Write a tile floor edge list, load it back and print shortest distances as grids.", long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 3)]
    width: usize,

    #[arg(long, default_value_t = 3)]
    height: usize,

    /// Edge-list file to write and read back
    #[arg(short, long, default_value_t = String::from("table_tile_floor.txt"))]
    file: String,

    /// Source node id. If omitted, runs from every tile in turn.
    #[arg(short, long)]
    source: Option<usize>,

    /// Link tiles in both directions instead of only rightwards and downwards
    #[arg(long, default_value_t = false)]
    bidirectional: bool,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Scan)]
    algorithm: Algorithm,
}

fn run(cli: Cli) -> Result<()> {
    let floor = TileFloor::new(cli.width, cli.height).bidirectional(cli.bidirectional);
    floor
        .save(&cli.file)
        .with_context(|| format!("writing {}", &cli.file))?;
    let graph = if floor.round_trips() {
        edge_list::read_graph(&cli.file).with_context(|| format!("loading {}", &cli.file))?
    } else {
        tracing::warn!(
            width = floor.width,
            height = floor.height,
            "{} cannot be read back (header below tile count), using the in-memory floor",
            &cli.file
        );
        floor.graph()?
    };

    let sources = match cli.source {
        Some(s) => vec![s],
        None => floor.demo_sources(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for s in sources {
        writeln!(out, "====================== source = {}", s)?;
        let dist = cli
            .algorithm
            .run(&graph, s)
            .with_context(|| format!("searching from node {}", s))?;
        report::write_grid(&mut out, floor.width, floor.height, &dist)?;
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
