use std::io::Write;

use csv::Writer;

use crate::coord::coord_to_node;
use crate::error::{unnamed_io, Result};
use crate::graph::{Distance, INFINITY};

/// Two aligned rows: node ids `1..=node_count`, then their distances.
pub fn write_distances<W: Write>(
    out: &mut W,
    distances: &[Distance],
    node_count: usize,
) -> Result<()> {
    let ids: String = (1..=node_count).map(|i| format!("{:>9} ", i)).collect();
    let values: String = distances
        .iter()
        .skip(1)
        .take(node_count)
        .map(|d| format!("{:>9} ", d))
        .collect();
    writeln!(out, "{}", ids)
        .and_then(|_| writeln!(out, "{}", values))
        .map_err(unnamed_io)
}

/// Distances laid out on the floor, one text row per tile row. Unreached
/// tiles print as -1.
pub fn write_grid<W: Write>(
    out: &mut W,
    width: usize,
    height: usize,
    distances: &[Distance],
) -> Result<()> {
    for y in 0..height {
        let row: String = (0..width)
            .map(|x| match distances.get(coord_to_node(width, x, y)) {
                Some(&d) if d < INFINITY => format!("{:>3}", d),
                _ => format!("{:>3}", -1),
            })
            .collect();
        writeln!(out, "{}", row).map_err(unnamed_io)?;
    }
    Ok(())
}

/// `node_id,distance` rows in id order. Unreached nodes are written as `inf`
/// only when `include_unreachable` is set.
pub fn write_distances_csv<W: Write>(
    wtr: &mut Writer<W>,
    distances: &[Distance],
    node_count: usize,
    include_unreachable: bool,
) -> Result<usize> {
    wtr.write_record(["node_id", "distance"])?;
    let mut written = 0;
    for (node_id, &d) in distances.iter().enumerate().take(node_count + 1).skip(1) {
        if d < INFINITY || include_unreachable {
            let val = if d < INFINITY {
                d.to_string()
            } else {
                String::from("inf")
            };
            wtr.write_record(&[node_id.to_string(), val])?;
            written += 1;
        }
    }
    wtr.flush().map_err(unnamed_io)?;
    Ok(written)
}
