use halo_graph::{make_connections, make_valueless_connections, Connection, Graph, NodeId};
use std::collections::{HashMap, HashSet};

fn two_ids() -> (NodeId, NodeId) {
    let mut g: Graph<()> = Graph::new();
    (g.add_node(()), g.add_node(()))
}

#[test]
fn test_make_connections_mirrors_targets() {
    let (a, b) = two_ids();
    let (in_a, in_b) = make_connections(a, b, 3.5f64);

    assert_eq!(in_a.target(), Some(b));
    assert_eq!(in_b.target(), Some(a));
    assert_eq!(in_a.value(), in_b.value());
    assert!(in_a.shares_payload_with(&in_b));
}

#[test]
fn test_payload_outlives_first_release() {
    let (a, b) = two_ids();
    let (in_a, in_b) = make_connections(a, b, vec![1, 2, 3]);

    assert_eq!(in_a.release(), None);
    assert_eq!(in_b.payload_shares(), 1);
    assert_eq!(in_b.value(), Some(&vec![1, 2, 3]));
    assert_eq!(in_b.release(), Some(vec![1, 2, 3]));
}

#[test]
fn test_valueless_pair() {
    let (a, b) = two_ids();
    let (in_a, in_b): (Connection<String>, Connection<String>) = make_valueless_connections(a, b);

    assert!(in_a.is_valueless());
    assert_eq!(in_b.value(), None);
    assert!(!in_a.shares_payload_with(&in_b));
    assert_eq!(in_a.release(), None);
}

#[test]
fn test_blank_compares_unequal_to_normal() {
    let (a, b) = two_ids();
    let (normal, _) = make_connections(a, b, 1u8);
    let blank = Connection::blank();

    assert!(blank.is_blank());
    assert_eq!(blank.target(), None);
    assert_eq!(blank.value(), None);
    assert_ne!(blank, normal);
    assert_ne!(normal, blank);
}

#[test]
fn test_connections_as_hash_keys() {
    let (a, b) = two_ids();
    let (x, y) = make_connections(a, b, 'k');

    let mut set = HashSet::new();
    set.insert(x);
    set.insert(y);
    assert_eq!(set.len(), 2);
    assert!(set.iter().any(|c| c.target() == Some(a)));
    assert!(set.iter().any(|c| c.target() == Some(b)));
}

#[test]
fn test_debug_shows_target_and_value() {
    let (a, b) = two_ids();
    let (x, _) = make_connections(a, b, 5);
    let text = format!("{x:?}");
    assert!(text.contains("target"));
    assert!(text.contains('5'));
    assert_eq!(format!("{:?}", Connection::<u8>::blank()), "Connection { target: None, value: None }");
}

/// Edge kind carried as a zero-sized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Road;

#[test]
fn test_zero_sized_payload_survives_graph_round_trip() {
    let mut g: Graph<(), Road> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    g.connect(a, b, Road).unwrap();

    assert_eq!(g.edge_value(a, b), Some(&Road));
    assert_eq!(g.edge_value(b, a), Some(&Road));
    assert_eq!(g.edge(a, b).unwrap().payload_shares(), 2);
    let values: Vec<_> = g.node(a).unwrap().edge_values().iter().collect();
    assert_eq!(values, vec![Some(&Road)]);

    assert_eq!(g.disconnect(a, b), Ok(Some(Road)));
}

#[test]
fn test_unit_edges_stay_valueless_through_graph() {
    let mut g: Graph<()> = Graph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    g.connect(a, b, ()).unwrap();

    assert!(g.edge(a, b).unwrap().is_valueless());
    assert_eq!(g.edge_value(a, b), None);
    assert_eq!(g.disconnect(a, b), Ok(None));
}

#[test]
fn test_hashed_adjacency_finds_valued_halves() {
    let mut g: Graph<char, u16, HashMap<NodeId, Connection<u16>>> = Graph::new();
    let a = g.add_node('a');
    let b = g.add_node('b');
    let c = g.add_node('c');
    g.connect(a, b, 12).unwrap();
    g.connect_valueless(a, c).unwrap();

    assert!(g.contains_edge(b, a));
    assert_eq!(g.edge_value(a, b), Some(&12));
    assert!(g.edge(c, a).unwrap().is_valueless());

    let mut around: Vec<char> = g.neighbors(a).unwrap().iter().map(|n| *n.value()).collect();
    around.sort_unstable();
    assert_eq!(around, vec!['b', 'c']);

    assert_eq!(g.disconnect(b, a), Ok(Some(12)));
    assert_eq!(g.disconnect(c, a), Ok(None));
    assert_eq!(g.edge_count(), 0);
}
