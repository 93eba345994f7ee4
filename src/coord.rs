use crate::graph::NodeId;

/// A tile position on a floor of fixed width. `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Linear node id of tile `(x, y)`: ids are 1-based and laid out row by row.
pub fn coord_to_node(width: usize, x: usize, y: usize) -> NodeId {
    1 + y * width + x
}

/// Inverse of [`coord_to_node`]. `node` must be >= 1 and `width` >= 1.
pub fn node_to_coord(width: usize, node: NodeId) -> Coord {
    Coord {
        x: (node - 1) % width,
        y: (node - 1) / width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn three_wide_layout() {
        // 1 2 3
        // 4 5 6
        // 7 8 9
        assert_eq!(coord_to_node(3, 0, 0), 1);
        assert_eq!(coord_to_node(3, 2, 0), 3);
        assert_eq!(coord_to_node(3, 0, 1), 4);
        assert_eq!(coord_to_node(3, 2, 2), 9);
        assert_eq!(node_to_coord(3, 6), Coord::new(2, 1));
        assert_eq!(node_to_coord(3, 7), Coord::new(0, 2));
    }

    #[test]
    fn width_one_is_a_column() {
        assert_eq!(coord_to_node(1, 0, 4), 5);
        assert_eq!(node_to_coord(1, 5), Coord::new(0, 4));
    }

    proptest! {
        #[test]
        fn mapping_round_trips(width in 1usize..200, x_seed in 0usize..1000, y in 0usize..1000) {
            let x = x_seed % width;
            let node = coord_to_node(width, x, y);
            prop_assert!(node >= 1);
            prop_assert_eq!(node_to_coord(width, node), Coord::new(x, y));
        }

        #[test]
        fn node_round_trips(width in 1usize..200, node in 1usize..100_000) {
            let c = node_to_coord(width, node);
            prop_assert_eq!(coord_to_node(width, c.x, c.y), node);
        }
    }
}
