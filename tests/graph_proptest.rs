use halo_graph::{Graph, GraphError, NodeId};
use petgraph::graphmap::UnGraphMap;
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Operation {
    AddNode,
    RemoveNode(usize),
    Connect(usize, usize, u16),
    Disconnect(usize, usize),
    Update(usize, usize, u16),
}

/// Edge weight that counts live instances.
struct Weight {
    value: u16,
    live: Rc<Cell<usize>>,
}

impl Weight {
    fn new(value: u16, live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            value,
            live: live.clone(),
        }
    }
}

impl Drop for Weight {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            2 => Just(Operation::AddNode),
            1 => any::<usize>().prop_map(Operation::RemoveNode),
            4 => (any::<usize>(), any::<usize>(), any::<u16>())
                .prop_map(|(a, b, w)| Operation::Connect(a, b, w)),
            2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Operation::Disconnect(a, b)),
            1 => (any::<usize>(), any::<usize>(), any::<u16>())
                .prop_map(|(a, b, w)| Operation::Update(a, b, w)),
        ],
        1..120,
    )
}

proptest! {
    #[test]
    fn test_graph_matches_petgraph_model(ops in operations()) {
        let live = Rc::new(Cell::new(0));
        let mut graph: Graph<u32, Weight> = Graph::new();
        let mut model: UnGraphMap<u32, u16> = UnGraphMap::new();
        let mut ids: BTreeMap<u32, NodeId> = BTreeMap::new();
        let mut next_key = 0u32;

        for op in ops {
            let keys: Vec<u32> = ids.keys().copied().collect();
            let pick = |i: usize| keys.get(i % keys.len().max(1)).copied();

            match op {
                Operation::AddNode => {
                    let id = graph.add_node(next_key);
                    model.add_node(next_key);
                    ids.insert(next_key, id);
                    next_key += 1;
                }
                Operation::RemoveNode(i) => {
                    if let Some(k) = pick(i) {
                        let id = ids.remove(&k).unwrap();
                        prop_assert_eq!(graph.remove_node(id), Ok(k));
                        model.remove_node(k);
                    }
                }
                Operation::Connect(i, j, w) => {
                    if let (Some(ka), Some(kb)) = (pick(i), pick(j)) {
                        let result = graph.connect(ids[&ka], ids[&kb], Weight::new(w, &live));
                        if ka == kb {
                            prop_assert_eq!(result, Err(GraphError::SelfLoop(ids[&ka])));
                        } else if model.contains_edge(ka, kb) {
                            let rejected = matches!(result, Err(GraphError::DuplicateEdge { .. }));
                            prop_assert!(rejected, "duplicate {} -- {} accepted", ka, kb);
                        } else {
                            prop_assert!(result.is_ok());
                            model.add_edge(ka, kb, w);
                        }
                    }
                }
                Operation::Disconnect(i, j) => {
                    if let (Some(ka), Some(kb)) = (pick(i), pick(j)) {
                        let result = graph.disconnect(ids[&ka], ids[&kb]);
                        match model.remove_edge(ka, kb) {
                            Some(w) => {
                                let payload = result.unwrap().unwrap();
                                prop_assert_eq!(payload.value, w);
                            }
                            None => prop_assert!(result.is_err()),
                        }
                    }
                }
                Operation::Update(i, j, w) => {
                    if let (Some(ka), Some(kb)) = (pick(i), pick(j)) {
                        if let Some(weight) = model.edge_weight_mut(ka, kb) {
                            *weight = w;
                            graph.edge_value_mut(ids[&ka], ids[&kb]).unwrap().value = w;
                        } else {
                            prop_assert!(graph.edge_value_mut(ids[&ka], ids[&kb]).is_none());
                        }
                    }
                }
            }

            prop_assert_eq!(graph.node_count(), model.node_count());
            prop_assert_eq!(graph.edge_count(), model.edge_count());
            prop_assert_eq!(live.get(), model.edge_count());
        }

        for (&key, &id) in &ids {
            let ours: BTreeSet<u32> = graph
                .neighbors(id)
                .unwrap()
                .iter()
                .map(|n| *n.value())
                .collect();
            let theirs: BTreeSet<u32> = model.neighbors(key).collect();
            prop_assert_eq!(ours, theirs);

            for other in model.neighbors(key) {
                let expected = model.edge_weight(key, other).copied();
                prop_assert_eq!(graph.edge_value(id, ids[&other]).map(|w| w.value), expected);
                prop_assert_eq!(graph.edge_value(ids[&other], id).map(|w| w.value), expected);
            }
        }

        drop(graph);
        prop_assert_eq!(live.get(), 0);
    }
}
