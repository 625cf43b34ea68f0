//! Nodes, half-edges and the views over them.
//!
//! - `connection`: half-edges sharing one payload per edge
//! - `adjacency`: backing collections for a node's half-edges
//! - `view`: projection views (adjacent ids, edges, payloads, resolved nodes)
//! - `node`: identity-bearing vertices
//! - `undirected`: the owning graph that runs edge transactions

pub mod adjacency;
pub mod connection;
mod id;
pub mod node;
mod slots;
pub mod undirected;
pub mod view;

pub use adjacency::{Adjacency, RandomAccess};
pub use connection::{make_connections, make_valueless_connections, Connection};
pub use id::NodeId;
pub use node::Node;
pub use undirected::Graph;
pub use view::{
    EdgesView, NeighborsView, NodesView, Projected, Projection, ToEdge, ToNode, ToTarget, ToValue,
    ValuesView, View,
};
