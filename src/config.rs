//! Graph configuration.

/// What [`Graph::connect`](crate::graph::Graph::connect) does when the two
/// nodes are already adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`GraphError::DuplicateEdge`](crate::GraphError::DuplicateEdge);
    /// the graph is left unchanged.
    #[default]
    Reject,
    /// Succeed without touching the existing edge; the new payload is dropped.
    Ignore,
    /// Sever the existing edge (destroying its payload) and install the new one.
    Replace,
}

/// Construction-time settings for a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Node slots to reserve up front.
    pub node_capacity: usize,
    /// Handling of repeated `connect` calls for one pair of nodes.
    pub duplicate_policy: DuplicatePolicy,
}

impl GraphConfig {
    /// Default configuration: no reservation, duplicates rejected.
    pub const fn new() -> Self {
        Self {
            node_capacity: 0,
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }

    /// Sets the number of node slots to reserve.
    #[must_use]
    pub const fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Sets the duplicate-edge policy.
    #[must_use]
    pub const fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}
