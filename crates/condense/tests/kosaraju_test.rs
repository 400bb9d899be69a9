use condense::graph::{self, CompactDirectedGraph};
use condense::{
    Components, Error, Kosaraju, components_from_edges, strongly_connected_components,
};

/// Partition as sorted vertex lists, sorted by first vertex, so ids do not matter.
fn partition(c: &Components) -> Vec<Vec<usize>> {
    let mut groups = c.groups();
    groups.sort();
    groups
}

const WIKIPEDIA_EDGES: [(usize, usize); 14] = [
    (0, 1),
    (1, 2),
    (1, 4),
    (1, 5),
    (2, 3),
    (2, 6),
    (3, 2),
    (3, 7),
    (4, 0),
    (4, 5),
    (5, 6),
    (6, 5),
    (7, 3),
    (7, 6),
];

#[test]
fn empty_graph_has_empty_mapping() {
    let c = strongly_connected_components(&CompactDirectedGraph::new());
    assert!(c.is_empty());
    assert_eq!(c.count(), 0);
    assert!(c.mapping().is_empty());
    assert!(c.groups().is_empty());
}

#[test]
fn single_vertex_is_component_one() {
    let c = components_from_edges(1, []).unwrap();
    assert_eq!(c.mapping(), &[1]);
    assert_eq!(c.count(), 1);
}

#[test]
fn one_way_edge_gives_two_singletons() {
    let c = components_from_edges(2, [(0, 1)]).unwrap();
    assert_eq!(c.count(), 2);
    assert_ne!(c.mapping()[0], c.mapping()[1]);
    // Traversal order is fixed, so ids are too.
    assert_eq!(c.mapping(), &[1, 2]);
}

#[test]
fn two_cycle_is_one_component() {
    let c = components_from_edges(2, [(0, 1), (1, 0)]).unwrap();
    assert_eq!(c.mapping(), &[1, 1]);
    assert!(c.same_component(0, 1));
}

#[test]
fn wikipedia_example_has_three_components() {
    let c = components_from_edges(8, WIKIPEDIA_EDGES).unwrap();
    assert_eq!(c.count(), 3);
    assert_eq!(
        partition(&c),
        vec![vec![0, 1, 4], vec![2, 3, 7], vec![5, 6]]
    );
    assert!(c.same_component(2, 7));
    assert!(!c.same_component(1, 2));
}

#[test]
fn textbook_example_with_isolated_vertex() {
    let edges = [
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (2, 4),
        (3, 4),
        (4, 5),
        (4, 6),
        (6, 7),
        (7, 4),
    ];
    let c = components_from_edges(8, edges).unwrap();
    assert_eq!(c.count(), 6);
    assert_eq!(
        partition(&c),
        vec![vec![0], vec![1], vec![2], vec![3], vec![4, 6, 7], vec![5]]
    );
}

#[test]
fn self_loops_and_parallel_edges_do_not_change_the_partition() {
    let plain = components_from_edges(3, [(0, 1), (1, 0)]).unwrap();
    let noisy =
        components_from_edges(3, [(0, 1), (0, 1), (1, 0), (1, 1), (2, 2), (2, 2), (1, 0)])
            .unwrap();
    assert_eq!(partition(&plain), partition(&noisy));
    assert_eq!(noisy.count(), 2);
}

#[test]
fn isolated_vertices_are_singletons() {
    let c = components_from_edges(4, [(1, 2), (2, 1)]).unwrap();
    assert_eq!(partition(&c), vec![vec![0], vec![1, 2], vec![3]]);
}

#[test]
fn invalid_edge_is_reported_before_solving() {
    let err = components_from_edges(3, [(0, 1), (1, 3)]).unwrap_err();
    assert_eq!(
        err,
        Error::Graph(graph::Error::InvalidVertex {
            vertex: 3,
            vertex_count: 3
        })
    );
    assert_eq!(
        err.to_string(),
        "vertex 3 is out of range for a graph with 3 vertices"
    );
}

#[test]
fn external_transpose_gives_the_same_answer() {
    let g = CompactDirectedGraph::from_edges(8, WIKIPEDIA_EDGES).unwrap();
    let t = g.transpose();

    let external = Kosaraju::with_transpose(&g, &t).unwrap().solve();
    let internal = Kosaraju::new(&g).solve();
    assert_eq!(external, internal);
}

#[test]
fn external_transpose_with_wrong_shape_is_rejected() {
    let g = CompactDirectedGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();

    let too_small = CompactDirectedGraph::with_vertices(2);
    assert_eq!(
        Kosaraju::with_transpose(&g, &too_small).unwrap_err(),
        Error::VertexCountMismatch {
            graph: 3,
            transpose: 2
        }
    );

    let missing_edge = CompactDirectedGraph::from_edges(3, [(1, 0)]).unwrap();
    assert_eq!(
        Kosaraju::with_transpose(&g, &missing_edge).unwrap_err(),
        Error::EdgeCountMismatch {
            graph: 2,
            transpose: 1
        }
    );
}

#[test]
fn repeated_solves_are_identical() {
    let g = CompactDirectedGraph::from_edges(8, WIKIPEDIA_EDGES).unwrap();
    let solver = Kosaraju::new(&g);
    let first = solver.solve();
    let second = solver.solve();
    assert_eq!(first, second);
    assert_eq!(partition(&first), partition(&strongly_connected_components(&g)));
}

#[test]
fn solving_after_growth_sees_new_edges() {
    let mut g = CompactDirectedGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    assert_eq!(strongly_connected_components(&g).count(), 3);

    g.add_edge(2, 0).unwrap();
    let v = g.add_vertex();
    let c = strongly_connected_components(&g);
    assert_eq!(c.count(), 2);
    assert_eq!(partition(&c), vec![vec![0, 1, 2], vec![v]]);
}

#[test]
fn long_chain_does_not_overflow_the_stack() {
    let n = 300_000;
    let chain: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();

    let open = components_from_edges(n, chain.iter().copied()).unwrap();
    assert_eq!(open.count(), n);

    let closed = components_from_edges(n, chain.iter().copied().chain([(n - 1, 0)])).unwrap();
    assert_eq!(closed.count(), 1);
    assert!(closed.mapping().iter().all(|&id| id == 1));
}

#[test]
fn components_serialize_mapping_and_count() {
    // Vertex 2 finishes last in the first pass, so its component is met first.
    let c = components_from_edges(3, [(0, 1), (1, 0)]).unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"mapping":[2,2,1],"count":2}"#);
}

#[test]
fn solver_exposes_the_graph_and_its_transpose() {
    let g = CompactDirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 1)]).unwrap();

    let owned = Kosaraju::new(&g);
    assert_eq!(owned.graph(), &g);
    assert_eq!(owned.transpose(), &g.transpose());
    assert!(owned.transpose().has_edge(1, 0));

    let t = g.transpose();
    let borrowed = Kosaraju::with_transpose(&g, &t).unwrap();
    assert!(std::ptr::eq(borrowed.graph(), &g));
    assert!(std::ptr::eq(borrowed.transpose(), &t));
}

#[test]
fn into_mapping_returns_the_component_ids() {
    let c = components_from_edges(4, [(0, 1), (1, 0), (2, 3)]).unwrap();
    let expected = c.mapping().to_vec();
    let mapping = c.into_mapping();
    assert_eq!(mapping, expected);
    assert_eq!(mapping.len(), 4);
    assert_eq!(mapping[0], mapping[1]);
    assert_ne!(mapping[2], mapping[3]);
}

#[test]
fn unallocatable_vertex_count_is_reported_before_solving() {
    assert_eq!(
        components_from_edges(usize::MAX, std::iter::empty()).unwrap_err(),
        Error::Graph(graph::Error::CapacityOverflow {
            vertex_count: usize::MAX
        })
    );
}
