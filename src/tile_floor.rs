/*
Synthetic "tile floor" graphs: every tile links to its right-hand and lower
neighbour with weight 1.

    *-*-*
    | | |
    *-*-*
    | | |
    *-*-*

Edges are emitted one direction per axis pass (left to right, top to bottom)
unless `bidirectional` is set, in which case every edge is followed by its
reverse.
*/

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::coord::coord_to_node;
use crate::edge_list;
use crate::error::{unnamed_io, Error, Result};
use crate::graph::{Graph, NodeId, Weight};

const TILE_WEIGHT: Weight = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileFloor {
    pub width: usize,
    pub height: usize,
    pub bidirectional: bool,
}

impl TileFloor {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bidirectional: false,
        }
    }

    pub fn bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    pub fn tiles(&self) -> usize {
        self.width * self.height
    }

    /// Header of the edge-list file: the number of edge lines that follow.
    pub fn edge_count(&self) -> usize {
        if self.width == 0 || self.height == 0 {
            return 0;
        }
        let one_way = self.width * (self.height - 1) + (self.width - 1) * self.height;
        if self.bidirectional {
            2 * one_way
        } else {
            one_way
        }
    }

    /// Whether the written file reads back: its header (the edge count) also
    /// bounds the node ids, which is too small on 1-wide or 1-high strips.
    pub fn round_trips(&self) -> bool {
        self.tiles() > 0 && self.edge_count() >= self.tiles()
    }

    /// Sources for a full demo run: the far corner first, then every tile.
    pub fn demo_sources(&self) -> Vec<NodeId> {
        let far_corner = self.tiles();
        std::iter::once(far_corner).chain(1..=far_corner).collect()
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidFloor {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Horizontal edges row by row, then vertical edges column by column.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        let width = self.width;
        let horizontal = (0..self.height).flat_map(move |y| {
            (1..width).map(move |x| (coord_to_node(width, x - 1, y), coord_to_node(width, x, y)))
        });
        let height = self.height;
        let vertical = (0..self.width).flat_map(move |x| {
            (1..height).map(move |y| (coord_to_node(width, x, y - 1), coord_to_node(width, x, y)))
        });
        let bidirectional = self.bidirectional;
        horizontal.chain(vertical).flat_map(move |(u, v)| {
            let reverse = bidirectional.then_some((v, u, TILE_WEIGHT));
            std::iter::once((u, v, TILE_WEIGHT)).chain(reverse)
        })
    }

    /// Builds the floor in memory. Capacity covers every tile even on 1-wide
    /// strips, where the edge count alone would be too small.
    pub fn graph(&self) -> Result<Graph> {
        self.validate()?;
        let mut graph = Graph::try_new(self.edge_count().max(self.tiles()))?;
        for (u, v, w) in self.edges() {
            graph.set_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// Writes the floor in the edge-list text format.
    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        self.validate()?;
        edge_list::write_edges(out, self.edge_count(), self.edges()).map_err(unnamed_io)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.validate()?;
        let file = File::create(path).map_err(|e| Error::from_io(path, e))?;
        let mut out = BufWriter::new(file);
        edge_list::write_edges(&mut out, self.edge_count(), self.edges())
            .and_then(|_| out.flush())
            .map_err(|e| Error::from_io(path, e))?;
        tracing::info!(
            path = %path.display(),
            width = self.width,
            height = self.height,
            edges = self.edge_count(),
            "wrote tile floor"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_by_three_text() {
        let mut out = Vec::new();
        TileFloor::new(3, 3).write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "12\n\
            1 2 1\n2 3 1\n4 5 1\n5 6 1\n7 8 1\n8 9 1\n\
            1 4 1\n4 7 1\n2 5 1\n5 8 1\n3 6 1\n6 9 1\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn header_matches_edge_lines() {
        for (w, h) in [(1, 1), (1, 4), (4, 1), (2, 3), (5, 5)] {
            let floor = TileFloor::new(w, h);
            assert_eq!(floor.edges().count(), floor.edge_count());
            assert_eq!(floor.edge_count(), w * (h - 1) + (w - 1) * h);
            let both = floor.bidirectional(true);
            assert_eq!(both.edges().count(), both.edge_count());
        }
    }

    #[test]
    fn bidirectional_follows_each_edge_with_its_reverse() {
        let edges: Vec<_> = TileFloor::new(2, 1).bidirectional(true).edges().collect();
        assert_eq!(edges, vec![(1, 2, 1), (2, 1, 1)]);
    }

    #[test]
    fn empty_floor_is_rejected() {
        assert!(matches!(
            TileFloor::new(0, 3).graph(),
            Err(Error::InvalidFloor { width: 0, height: 3 })
        ));
        assert!(TileFloor::new(3, 0).write(&mut Vec::new()).is_err());
    }

    #[test]
    fn strip_graph_holds_every_tile() {
        let graph = TileFloor::new(4, 1).graph().unwrap();
        assert_eq!(graph.node_count(), Some(4));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn strips_do_not_round_trip() {
        assert!(TileFloor::new(3, 3).round_trips());
        assert!(TileFloor::new(2, 2).round_trips());
        assert!(!TileFloor::new(4, 1).round_trips());
        assert!(!TileFloor::new(1, 4).round_trips());
        assert!(TileFloor::new(1, 4).bidirectional(true).round_trips());
        assert!(!TileFloor::new(0, 4).round_trips());
    }

    #[test]
    fn demo_starts_from_far_corner() {
        assert_eq!(TileFloor::new(2, 2).demo_sources(), vec![4, 1, 2, 3, 4]);
    }

    #[test]
    fn single_tile_has_no_nodes() {
        let graph = TileFloor::new(1, 1).graph().unwrap();
        assert_eq!(graph.node_count(), None);
    }
}
