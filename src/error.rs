use std::io;
use std::path::PathBuf;

use crate::graph::{NodeId, Weight};

/// Everything that can go wrong while loading, generating or searching a graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open {}: file not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad line [{line}]: {found} integer entries (line format: node1 node2 distance)")]
    Parse { line: usize, found: usize },

    #[error("invalid edge {u} -> {v} (weight {weight}): ids must be in 0..={capacity}, weight must be > 0")]
    InvalidEdge {
        u: i64,
        v: i64,
        weight: i64,
        capacity: usize,
    },

    #[error("graph capacity {capacity} exceeds the supported maximum of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },

    #[error("source node {node} is outside 1..={node_count}")]
    InvalidSource { node: NodeId, node_count: usize },

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("tile floor must be at least 1x1, got {width}x{height}")]
    InvalidFloor { width: usize, height: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Maps an `io::Error` raised while opening `path`, keeping "not found" distinct.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound { path }
        } else {
            Error::Io { path, source }
        }
    }

    pub(crate) fn invalid_edge(u: i64, v: i64, weight: i64, capacity: usize) -> Self {
        Error::InvalidEdge {
            u,
            v,
            weight,
            capacity,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Used by writers that have no file path to attach (in-memory buffers, stdout).
pub(crate) fn unnamed_io(source: io::Error) -> Error {
    Error::Io {
        path: PathBuf::from("<stream>"),
        source,
    }
}
