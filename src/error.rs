//! Errors reported by the owning [`Graph`](crate::graph::Graph).
//!
//! The core types (handles, connections, nodes, views) report misuse through
//! `Option` and never fail; only graph-level transactions return these.

use crate::graph::NodeId;
use thiserror::Error;

/// Graph operation error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The id does not name a live node of this graph.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// An edge from a node to itself was requested.
    #[error("self-loop on node {0} is not supported")]
    SelfLoop(NodeId),

    /// The nodes are already adjacent and the policy rejects duplicates.
    #[error("nodes {from} and {to} are already connected")]
    DuplicateEdge {
        /// Endpoint passed first.
        from: NodeId,
        /// Endpoint passed second.
        to: NodeId,
    },

    /// The nodes are not adjacent.
    #[error("no edge between {from} and {to}")]
    EdgeNotFound {
        /// Endpoint passed first.
        from: NodeId,
        /// Endpoint passed second.
        to: NodeId,
    },
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
