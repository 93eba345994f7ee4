//! Dense single-source shortest paths over small weighted graphs, with helpers
//! for graphs laid out as a rectangular tile floor.

pub mod coord;
pub mod dijkstra;
pub mod edge_list;
pub mod error;
pub mod graph;
pub mod report;
pub mod tile_floor;

pub use coord::{coord_to_node, node_to_coord, Coord};
pub use dijkstra::{dijkstra, dijkstra_heap, Algorithm};
pub use error::{Error, Result};
pub use graph::{Distance, Graph, NodeId, Weight, INFINITY};
pub use tile_floor::TileFloor;

/// Installs the fmt subscriber used by both binaries. `RUST_LOG` overrides
/// the default `info` level.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
