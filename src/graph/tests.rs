use super::*;

fn grid_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(0.0, 20.0),
        Point::new(10.0, 20.0),
        Point::new(20.0, 20.0),
    ]
}

fn has_edge(edges: &[GraphEdge], a: usize, b: usize) -> bool {
    let (i, j) = if a < b { (a, b) } else { (b, a) };
    edges.iter().any(|e| e.i == i && e.j == j)
}

#[test]
fn grid_tree_spans_all_nodes() {
    let pts = grid_points();
    let tree = build_spatial_graph(&pts, 3).expect("graph");
    assert_eq!(tree.len(), 5);
    assert_eq!(count_components(pts.len(), &tree), 1);
    assert!(has_edge(&tree, 0, 1));
    assert!(has_edge(&tree, 1, 2));
    assert!(has_edge(&tree, 3, 4));
    assert!(has_edge(&tree, 4, 5));
    // One of the three 20px rungs joins the rows; ties pick the lowest index.
    assert!(has_edge(&tree, 0, 3));
    let total: f32 = tree.iter().map(|e| e.weight).sum();
    assert!((total - 60.0).abs() < 1e-4);
}

#[test]
fn grid_tree_edges_classify_by_direction() {
    let pts = grid_points();
    let tree = build_spatial_graph(&pts, 3).expect("graph");
    let classified = crate::classify::classify_edges(&tree, &pts).expect("classify");

    let row = classified
        .horizontal
        .iter()
        .find(|e| e.endpoints == (0, 1))
        .expect("(0,0)-(10,0) is horizontal");
    assert!(row.angle_deg.abs() < 1e-5);
    let rung = classified
        .vertical
        .iter()
        .find(|e| e.endpoints == (0, 3))
        .expect("(0,0)-(0,20) is vertical");
    assert!((rung.angle_deg - 90.0).abs() < 1e-5);
    assert_eq!(classified.horizontal.len(), 4);
    assert_eq!(classified.vertical.len(), 1);
    assert!(classified.unclassified.is_empty());
}

#[test]
fn empty_and_single_point_inputs_yield_no_edges() {
    assert!(build_spatial_graph(&[], 5).unwrap().is_empty());
    assert!(build_spatial_graph(&[Point::new(1.0, 1.0)], 5)
        .unwrap()
        .is_empty());
}

#[test]
fn zero_k_is_rejected() {
    let err = build_spatial_graph(&grid_points(), 0).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InvalidConfig {
            field: "k_neighbors",
            ..
        }
    ));
}

#[test]
fn non_finite_points_are_rejected() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(f32::NAN, 1.0)];
    assert!(matches!(
        build_spatial_graph(&pts, 1),
        Err(AnalysisError::InvalidInput { .. })
    ));
}

#[test]
fn oversized_k_is_clamped() {
    let pts = grid_points();
    let graph = build_spatial_graph_with(&pts, 50, &KnnGraph, &Kruskal).unwrap();
    assert_eq!(graph.k_effective, 5);
    assert_eq!(graph.candidate_edges, 15);
    assert_eq!(graph.tree.len(), 5);
}

#[test]
fn distant_clusters_form_a_forest() {
    // Two tight triplets far apart; with k=2 no neighbor edge crosses.
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(6.0, 0.0),
        Point::new(500.0, 500.0),
        Point::new(503.0, 500.0),
        Point::new(506.0, 500.0),
    ];
    let graph = build_spatial_graph_with(&pts, 2, &KnnGraph, &Kruskal).unwrap();
    assert_eq!(graph.tree.len(), 4);
    assert_eq!(graph.components, 2);
}

#[test]
fn rtree_and_brute_force_agree() {
    let pts: Vec<Point> = (0..40)
        .map(|i| {
            let x = ((i * 37) % 101) as f32;
            let y = ((i * 53) % 89) as f32;
            Point::new(x, y)
        })
        .collect();
    for k in [1, 3, 5] {
        let fast = KnnGraph.neighbor_edges(&pts, k);
        let slow = BruteForceKnn.neighbor_edges(&pts, k);
        assert_eq!(fast, slow, "k={k}");
    }
}

#[test]
fn duplicate_points_are_linked_with_zero_weight() {
    let pts = vec![Point::new(5.0, 5.0), Point::new(5.0, 5.0), Point::new(9.0, 5.0)];
    let tree = build_spatial_graph(&pts, 1).unwrap();
    assert_eq!(tree.len(), 2);
    assert!(tree.iter().any(|e| e.i == 0 && e.j == 1 && e.weight == 0.0));
}
