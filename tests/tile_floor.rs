use pretty_assertions::assert_eq;

use tilepath::dijkstra::Algorithm;
use tilepath::{coord_to_node, edge_list, report, Distance, Error, TileFloor, INFINITY};

#[test]
fn generated_floor_loads_and_gives_manhattan_distances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table_tile_floor.txt");

    TileFloor::new(3, 3).save(&path).unwrap();
    let graph = edge_list::read_graph(&path).unwrap();
    assert_eq!(graph.capacity(), 12);
    assert_eq!(graph.node_count(), Some(9));
    assert_eq!(graph.edge_count(), 12);

    let dist = Algorithm::Scan.run(&graph, 1).unwrap();
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(dist[coord_to_node(3, x, y)], (x + y) as Distance);
        }
    }
}

#[test]
fn every_source_on_directed_floor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("floor.txt");
    TileFloor::new(3, 3).save(&path).unwrap();
    let graph = edge_list::read_graph(&path).unwrap();

    let mut out = Vec::new();
    for s in [9, 5, 1] {
        let dist = Algorithm::Scan.run(&graph, s).unwrap();
        assert_eq!(dist, Algorithm::Heap.run(&graph, s).unwrap());
        report::write_grid(&mut out, 3, 3, &dist).unwrap();
    }
    let text = String::from_utf8(out).unwrap();
    let expected = "\
 -1 -1 -1
 -1 -1 -1
 -1 -1  0
 -1 -1 -1
 -1  0  1
 -1  1  2
  0  1  2
  1  2  3
  2  3  4
";
    assert_eq!(text, expected);
}

#[test]
fn bidirectional_floor_reaches_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("floor.txt");
    let floor = TileFloor::new(4, 3).bidirectional(true);
    floor.save(&path).unwrap();
    let graph = edge_list::read_graph(&path).unwrap();

    for s in 1..=floor.tiles() {
        let dist = Algorithm::Scan.run(&graph, s).unwrap();
        assert!(dist[1..=floor.tiles()].iter().all(|&d| d < INFINITY));
    }
}

#[test]
fn saved_graph_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    let graph = edge_list::parse_graph("5\n1 2 10\n2 5 1\n".as_bytes()).unwrap();

    edge_list::save_graph(&path, &graph).unwrap();
    let again = edge_list::read_graph(&path).unwrap();
    assert_eq!(
        Algorithm::Scan.run(&again, 1).unwrap(),
        vec![INFINITY, 0, 10, INFINITY, INFINITY, 11]
    );
}

#[test]
fn malformed_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "2\n1 2\n").unwrap();
    assert!(matches!(
        edge_list::read_graph(&path),
        Err(Error::Parse { line: 2, found: 2 })
    ));
}

#[test]
fn writing_into_a_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("floor.txt");
    assert!(matches!(
        TileFloor::new(2, 2).save(&path),
        Err(Error::FileNotFound { .. })
    ));
}

#[test]
fn strip_floor_only_works_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strip.txt");
    let floor = TileFloor::new(4, 1);
    assert!(!floor.round_trips());

    floor.save(&path).unwrap();
    assert!(matches!(
        edge_list::read_graph(&path),
        Err(Error::InvalidEdge { .. })
    ));

    let graph = floor.graph().unwrap();
    let dist = Algorithm::Scan.run(&graph, 1).unwrap();
    assert_eq!(&dist[1..=4], &[0, 1, 2, 3]);
}
