//! # `halo-graph` - Shared-Payload Graph Nodes
//!
//! An in-memory undirected graph whose edges are stored as two half-edges, one
//! per endpoint, sharing a single payload. Node and edge payloads are both
//! optional (`()` means "none") and independently typed.
//!
//! ## Ownership Model
//!
//! - **Nodes** live in generational slots of their [`Graph`]. A node is never
//!   cloned or moved out, so its [`NodeId`] is stable for its whole life and is
//!   never issued again after removal.
//! - **Connections** (half-edges) store the target's id, never a reference, so
//!   they cannot dangle when the slot storage grows.
//! - **Edge payloads** are the only shared objects. [`TwinRc`] creates them with
//!   exactly two owners and offers no way to add more; the payload is destroyed
//!   exactly once, when the second half releases it.
//!
//! ## Views
//!
//! A single generic [`View`] builds every read-only iteration window over a
//! node's adjacency collection. What a view yields is decided by its
//! [`Projection`]: adjacent ids ([`ToTarget`]), half-edges ([`ToEdge`]), payloads
//! ([`ToValue`]) or resolved nodes ([`ToNode`]).
//!
//! ## Example
//!
//! ```rust
//! use halo_graph::Graph;
//!
//! let mut graph: Graph<i32, &str> = Graph::new();
//! let a = graph.add_node(1);
//! let b = graph.add_node(2);
//! let c = graph.add_node(3);
//!
//! graph.connect(a, b, "x").unwrap();
//! graph.connect(b, c, "y").unwrap();
//!
//! let around_b: Vec<_> = graph.adjacent_nodes(b).unwrap().iter().collect();
//! assert_eq!(around_b, vec![a, c]);
//! assert_eq!(graph.edge_value(b, a), Some(&"x"));
//!
//! assert_eq!(graph.disconnect(a, b).unwrap(), Some("x"));
//! assert!(graph.node(a).unwrap().edges().is_empty());
//! ```
//!
//! ## Concurrency
//!
//! None. Graphs are single-owner structures; [`TwinRc`] uses a non-atomic count
//! and is neither `Send` nor `Sync`.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod alloc;
pub mod config;
pub mod error;
pub mod graph;

pub use alloc::TwinRc;
pub use config::{DuplicatePolicy, GraphConfig};
pub use error::{GraphError, Result};
pub use graph::{
    make_connections, make_valueless_connections, Adjacency, Connection, EdgesView, Graph, Node,
    NodeId, NodesView, Projection, RandomAccess, ToEdge, ToNode, ToTarget, ToValue, View,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Index + generation, no padding.
    assert!(mem::size_of::<NodeId>() == 8);

    // A payload share is a single thin pointer; `None` uses the null niche.
    assert!(mem::size_of::<Option<TwinRc<u64>>>() == mem::size_of::<usize>());

    // A half-edge is its target id plus at most one pointer.
    assert!(mem::size_of::<Connection<u64>>() <= mem::size_of::<NodeId>() + mem::size_of::<usize>());
    assert!(mem::size_of::<Connection<()>>() <= mem::size_of::<NodeId>() + mem::size_of::<usize>());
};
