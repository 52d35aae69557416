use nalgebra::Vector2;
use narwhal::{Edge, Error, Graph, Node, SfdpOptions, layout};

fn path_graph() -> Graph {
    Graph {
        nodes: vec![Node::new("a"), Node::new("b"), Node::new("c")],
        edges: vec![Edge::new("a", "b"), Edge::new("b", "c")],
        directed: false,
    }
}

#[test]
fn layout_returns_a_position_per_node() {
    let g = path_graph();
    let result = layout::<2>(&g, &SfdpOptions::default()).unwrap();
    let ids: Vec<&str> = result.positions.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(result.snapshots >= 1 && result.snapshots <= 100);
    for p in result.positions.values() {
        assert!(p.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn layout_is_deterministic_for_a_seed() {
    let g = path_graph();
    let opts = SfdpOptions::<f64, 3> {
        seed: 99,
        ..Default::default()
    };
    let a = layout(&g, &opts).unwrap();
    let b = layout(&g, &opts).unwrap();
    assert_eq!(a.positions, b.positions);
}

#[test]
fn positioned_nodes_are_pinned_regardless_of_declaration_order() {
    // The pinned node is declared last but still has to be the anchored one.
    let g = Graph {
        nodes: vec![
            Node::new("free1"),
            Node::new("free2"),
            Node::at("hub", [5.0, -5.0]),
        ],
        edges: vec![Edge::new("hub", "free1"), Edge::new("hub", "free2")],
        directed: false,
    };
    let opts = SfdpOptions {
        fixed: true,
        tol: 0.01,
        ..Default::default()
    };
    let result = layout::<2>(&g, &opts).unwrap();
    assert_eq!(result.positions["hub"], Vector2::new(5.0, -5.0));
    assert!(result.snapshots > 2);
}

#[test]
fn node_positions_replace_option_positions() {
    let g = Graph {
        nodes: vec![Node::at("a", [1.0, 2.0]), Node::new("b")],
        edges: vec![Edge::new("a", "b")],
        directed: false,
    };
    let opts = SfdpOptions {
        initial_positions: vec![Vector2::new(100.0, 100.0), Vector2::new(-100.0, 0.0)],
        fixed: true,
        ..Default::default()
    };
    let result = layout::<2>(&g, &opts).unwrap();
    assert_eq!(result.positions["a"], Vector2::new(1.0, 2.0));
    assert_ne!(result.positions["b"], Vector2::new(-100.0, 0.0));
}

#[test]
fn missing_endpoint_is_rejected() {
    let g = Graph {
        nodes: vec![Node::new("a")],
        edges: vec![Edge::new("a", "ghost")],
        directed: false,
    };
    assert!(matches!(
        g.validate(),
        Err(Error::MissingEndpoint { edge_id }) if edge_id == "a->ghost"
    ));
    assert!(layout::<2>(&g, &SfdpOptions::default()).is_err());
}

#[test]
fn duplicate_node_is_rejected() {
    let g = Graph {
        nodes: vec![Node::new("a"), Node::at("a", [0.0, 0.0])],
        edges: Vec::new(),
        directed: false,
    };
    assert!(matches!(
        layout::<2>(&g, &SfdpOptions::default()),
        Err(Error::DuplicateNode { node_id }) if node_id == "a"
    ));
}

#[test]
fn position_with_wrong_dimension_is_rejected() {
    let g = Graph {
        nodes: vec![Node::at("a", [0.0, 0.0]), Node::at("b", [1.0, 2.0, 3.0])],
        edges: Vec::new(),
        directed: false,
    };
    assert!(matches!(
        layout::<2>(&g, &SfdpOptions::default()),
        Err(Error::DimensionMismatch {
            index: 1,
            expected: 2,
            found: 3
        })
    ));
}

#[test]
fn empty_graph_lays_out_to_nothing() {
    let result = layout::<2>(&Graph::default(), &SfdpOptions::default()).unwrap();
    assert!(result.positions.is_empty());
    assert_eq!(result.snapshots, 1);
    assert!(!result.converged);
}

#[test]
fn directed_edge_only_pulls_its_source() {
    // "a" is attracted to "b", while "b" is repelled by "a".
    let g = Graph {
        nodes: vec![Node::at("a", [0.0, 0.0]), Node::at("b", [4.0, 0.0])],
        edges: vec![Edge::new("a", "b")],
        directed: true,
    };
    let opts = SfdpOptions {
        iterations: 2,
        ..Default::default()
    };
    let result = layout::<2>(&g, &opts).unwrap();
    assert_eq!(result.positions["a"], Vector2::new(1.0, 0.0));
    assert_eq!(result.positions["b"], Vector2::new(5.0, 0.0));
}
