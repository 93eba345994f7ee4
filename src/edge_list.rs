//! Line-oriented edge-list files.
//!
//! ```text
//! 3          <- number of edge lines; also the highest addressable node id
//! 1 2 10     <- node1 node2 distance
//! 2 3 4
//! 1 3 20
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{unnamed_io, Error, Result};
use crate::graph::{Graph, NodeId, Weight};

/// Parses an edge list from any buffered reader.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph> {
    parse_from(reader, Path::new("<stream>"))
}

/// Reads an edge-list file.
pub fn read_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_io(path, e))?;
    let graph = parse_from(BufReader::new(file), path)?;
    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count().unwrap_or(0),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

fn parse_from<R: BufRead>(reader: R, origin: &Path) -> Result<Graph> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line.map_err(|e| Error::from_io(origin, e))?,
        None => return Err(Error::Parse { line: 1, found: 0 }),
    };
    let declared: usize = header
        .trim()
        .parse()
        .map_err(|_| Error::Parse { line: 1, found: 0 })?;
    tracing::info!(number_edges = declared, "edge list header");

    let mut graph = Graph::try_new(declared)?;
    let mut loaded = 0;
    for (i, line) in lines.take(declared).enumerate() {
        let line = line.map_err(|e| Error::from_io(origin, e))?;
        let values = leading_integers(&line, 3);
        if values.len() < 3 {
            return Err(Error::Parse {
                line: i + 2,
                found: values.len(),
            });
        }
        let (u, v, w) = (values[0], values[1], values[2]);
        let (Ok(from), Ok(to), Ok(weight)) = (
            NodeId::try_from(u),
            NodeId::try_from(v),
            Weight::try_from(w),
        ) else {
            return Err(Error::invalid_edge(u, v, w, graph.capacity()));
        };
        graph.set_edge(from, to, weight)?;
        tracing::debug!(u, v, weight = w, "edge");
        loaded += 1;
    }

    if loaded < declared {
        tracing::debug!(declared, loaded, "edge list ended early");
    }
    Ok(graph)
}

/// Reads up to `limit` integers from the front of `line` the way formatted
/// stream extraction does: each value is an optional sign and the longest run
/// of digits, and reading stops at the first place no integer starts. So
/// `3.5` yields 3 and `10abc` yields 10, with nothing read after either.
fn leading_integers(line: &str, limit: usize) -> Vec<i64> {
    let bytes = line.as_bytes();
    let mut values = Vec::with_capacity(limit);
    let mut pos = 0;
    while values.len() < limit {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let start = pos;
        if pos < bytes.len() && (bytes[pos] == b'-' || bytes[pos] == b'+') {
            pos += 1;
        }
        let digits = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits {
            break;
        }
        match line[start..pos].parse() {
            Ok(value) => values.push(value),
            Err(_) => break,
        }
    }
    values
}

/// Writes a header line followed by one `u v w` line per edge.
pub(crate) fn write_edges<W, I>(out: &mut W, header: usize, edges: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (NodeId, NodeId, Weight)>,
{
    writeln!(out, "{}", header)?;
    for (u, v, w) in edges {
        writeln!(out, "{} {} {}", u, v, w)?;
    }
    Ok(())
}

/// Header written for `graph`: large enough to both list every edge and
/// address every node id when read back.
fn header_for(graph: &Graph) -> usize {
    graph.capacity().max(graph.edge_count())
}

pub fn write_graph<W: Write>(out: &mut W, graph: &Graph) -> Result<()> {
    write_edges(out, header_for(graph), graph.edges()).map_err(unnamed_io)
}

pub fn save_graph(path: impl AsRef<Path>, graph: &Graph) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::from_io(path, e))?;
    let mut out = BufWriter::new(file);
    write_edges(&mut out, header_for(graph), graph.edges())
        .and_then(|_| out.flush())
        .map_err(|e| Error::from_io(path, e))
}
