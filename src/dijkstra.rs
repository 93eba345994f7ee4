use orx_priority_queue::*;

use crate::error::{Error, Result};
use crate::graph::{Distance, Graph, NodeId, INFINITY};

/// How the next closest unvisited node is selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Linear scan over all nodes each round, O(V^2) overall.
    #[default]
    Scan,
    /// Binary heap with decrease-key.
    Heap,
}

impl Algorithm {
    pub fn run(&self, graph: &Graph, source: NodeId) -> Result<Vec<Distance>> {
        match self {
            Algorithm::Scan => dijkstra(graph, source),
            Algorithm::Heap => dijkstra_heap(graph, source),
        }
    }
}

/// Returns the node count after checking that `source` can start a search.
fn check_source(graph: &Graph, source: NodeId) -> Result<usize> {
    let node_count = match graph.node_count() {
        Some(n) if n >= 1 => n,
        _ => return Err(Error::EmptyGraph),
    };
    if source < 1 || source > node_count {
        return Err(Error::InvalidSource {
            node: source,
            node_count,
        });
    }
    Ok(node_count)
}

/// Dijkstra from `source` to all nodes. The result is indexed by node id and
/// has `graph.capacity() + 1` entries; index 0 is unused and unreached nodes
/// hold [`INFINITY`].
///
/// Runs exactly `node_count` rounds. Each round scans ids `1..=node_count` and
/// keeps the first unvisited node with the strictly smallest distance, so when
/// only unreachable nodes remain the lowest unvisited id is taken and relaxes
/// nothing.
pub fn dijkstra(graph: &Graph, source: NodeId) -> Result<Vec<Distance>> {
    let node_count = check_source(graph, source)?;
    tracing::debug!(source, node_count, "scan dijkstra");

    let mut visited = vec![false; node_count + 1];
    let mut dist = vec![INFINITY; graph.capacity() + 1];
    dist[source] = 0;

    for _ in 1..=node_count {
        let mut mini: Option<NodeId> = None;
        for i in 1..=node_count {
            if !visited[i] && mini.map_or(true, |m| dist[i] < dist[m]) {
                mini = Some(i);
            }
        }
        // mini is now the closest unvisited node to source
        let Some(mini) = mini else { break };
        visited[mini] = true;

        // Replace any path source-i that is shorter through source-mini-i
        let row = graph.row(mini);
        for i in 1..=node_count {
            let w = row[i];
            if w > 0 && dist[mini] + Distance::from(w) < dist[i] {
                dist[i] = dist[mini] + Distance::from(w);
            }
        }
    }
    Ok(dist)
}

/// Same contract as [`dijkstra`], selecting the next node from a priority
/// queue instead of a full scan. Nodes never reached are never popped.
pub fn dijkstra_heap(graph: &Graph, source: NodeId) -> Result<Vec<Distance>> {
    let node_count = check_source(graph, source)?;
    tracing::debug!(source, node_count, "heap dijkstra");

    let mut visited = vec![false; node_count + 1];
    let mut dist = vec![INFINITY; graph.capacity() + 1];
    let mut queue: BinaryHeapWithMap<NodeId, Distance> = BinaryHeapWithMap::new();

    dist[source] = 0;
    queue.push(source, 0);

    while let Some((node_id, cost)) = queue.pop() {
        visited[node_id] = true;
        let row = graph.row(node_id);
        for next in 1..=node_count {
            let w = row[next];
            if w == 0 || visited[next] {
                continue;
            }
            let next_cost = cost + Distance::from(w);
            if next_cost < dist[next] {
                dist[next] = next_cost;
                queue.decrease_key_or_push(&next, next_cost);
            }
        }
    }
    Ok(dist)
}
