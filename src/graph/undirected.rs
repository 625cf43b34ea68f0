//! The owning collaborator: an undirected graph of [`Node`]s.
//!
//! `Graph` allocates nodes, hands out their [`NodeId`]s and runs every edge
//! change as a transaction over both endpoints: `connect` installs the two
//! halves built by [`make_connections`](crate::graph::make_connections),
//! `disconnect` and `remove_node` take both halves out again.
//!
//! Invariants kept between calls:
//! - every half stored in a node targets a live node of the same graph;
//! - `a` holds a half targeting `b` iff `b` holds one targeting `a`;
//! - no node holds two halves with the same target, and none targets itself;
//! - `edge_count` equals half the number of stored halves.

use crate::config::{DuplicatePolicy, GraphConfig};
use crate::error::{GraphError, Result};
use crate::graph::slots::Slots;
use crate::graph::view::{EdgesView, NeighborsView, NodesView, ToNode, View};
use crate::graph::{Adjacency, Connection, Node, NodeId};
use core::fmt;

/// An undirected graph with optional node values `T` and edge payloads `E`.
///
/// `A` selects the adjacency collection of every node and thereby the order of
/// all views: `Vec<Connection<E>>` (the default) keeps insertion order,
/// `BTreeSet<Connection<E>>` sorts by target id,
/// `HashMap<NodeId, Connection<E>>` looks halves up by target in constant time.
pub struct Graph<T, E = (), A = Vec<Connection<E>>> {
    slots: Slots<Node<T, E, A>>,
    edge_count: usize,
    config: GraphConfig,
}

impl<T, E, A> Graph<T, E, A>
where
    A: Adjacency<Payload = E>,
{
    /// Creates an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::new())
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::new().with_node_capacity(capacity))
    }

    /// Creates an empty graph from `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            slots: Slots::with_capacity(config.node_capacity),
            edge_count: 0,
            config,
        }
    }

    /// The configuration this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of live nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of edges (each counted once, not per half).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }

    // Nodes -----------------------------------------------------------------

    /// Adds an isolated node holding `value`.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = self.slots.insert_with(|id| Node::new(id, value));
        trace_graph!(node = %id, "node added");
        id
    }

    /// Removes a node after severing all of its edges, returning its value.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if `id` is not a live node.
    pub fn remove_node(&mut self, id: NodeId) -> Result<T> {
        let node = self.slots.get_mut(id).ok_or(GraphError::NodeNotFound(id))?;

        let mut halves = Vec::with_capacity(node.degree());
        node.disconnect_all(|half| halves.push(half));

        for half in halves {
            // Dropping both halves destroys the payload.
            if let Some(peer) = self.slots.get_mut(half.target) {
                drop(peer.disconnect(id));
            }
            self.edge_count -= 1;
        }

        let node = self.slots.remove(id).ok_or(GraphError::NodeNotFound(id))?;
        trace_graph!(node = %id, edges = self.edge_count, "node removed");
        Ok(node.into_value())
    }

    /// Returns `true` if `id` names a live node.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.slots.contains(id)
    }

    /// The node named by `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<T, E, A>> {
        self.slots.get(id)
    }

    /// The value of node `id`.
    pub fn node_value(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id).map(Node::value)
    }

    /// Mutable access to the value of node `id`.
    pub fn node_value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id).map(Node::value_mut)
    }

    /// Iterates live nodes in slot order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T, E, A>> + '_ {
        self.slots.iter()
    }

    /// Iterates live node ids in slot order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().map(Node::id)
    }

    /// Iterates node values mutably in slot order.
    pub fn node_values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_mut().map(Node::value_mut)
    }

    /// Removes every node and edge, destroying all payloads.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.edge_count = 0;
        trace_graph!("graph cleared");
    }

    pub(crate) fn resolve(&self, id: NodeId) -> &Node<T, E, A> {
        match self.slots.get(id) {
            Some(node) => node,
            None => panic!("adjacency refers to missing node {id}"),
        }
    }

    // Edges -----------------------------------------------------------------

    /// Connects `a` and `b` with an edge carrying `value`.
    ///
    /// Both halves share one payload; the void edge type `()` is not allocated
    /// at all. If the nodes are already adjacent the configured
    /// [`DuplicatePolicy`] decides the outcome.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either id is not a live node;
    /// - [`GraphError::SelfLoop`] if `a == b`;
    /// - [`GraphError::DuplicateEdge`] under [`DuplicatePolicy::Reject`].
    pub fn connect(&mut self, a: NodeId, b: NodeId, value: E) -> Result<()>
    where
        E: 'static,
    {
        self.link(a, b, |first, second| first.connect(second, value))
    }

    /// Connects `a` and `b` with an edge that carries no payload.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::connect`].
    pub fn connect_valueless(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.link(a, b, Node::connect_valueless)
    }

    fn link<F>(&mut self, a: NodeId, b: NodeId, install: F) -> Result<()>
    where
        F: FnOnce(&mut Node<T, E, A>, &mut Node<T, E, A>),
    {
        self.check_endpoints(a, b)?;

        if self.contains_edge(a, b) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    debug_graph!(from = %a, to = %b, "duplicate edge rejected");
                    return Err(GraphError::DuplicateEdge { from: a, to: b });
                }
                DuplicatePolicy::Ignore => {
                    debug_graph!(from = %a, to = %b, "duplicate edge ignored");
                    return Ok(());
                }
                DuplicatePolicy::Replace => {
                    drop(self.sever(a, b));
                    trace_graph!(from = %a, to = %b, "edge replaced");
                }
            }
        }

        let (first, second) = self
            .slots
            .get_pair_mut(a, b)
            .ok_or(GraphError::NodeNotFound(a))?;
        install(first, second);
        self.edge_count += 1;

        trace_graph!(from = %a, to = %b, edges = self.edge_count, "edge connected");
        Ok(())
    }

    /// Removes the edge between `a` and `b`.
    ///
    /// Returns the payload, now owned by the caller, or `None` for a valueless
    /// edge.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either id is not a live node;
    /// - [`GraphError::EdgeNotFound`] if the nodes are not adjacent.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> Result<Option<E>> {
        self.check_endpoints(a, b)?;
        if !self.contains_edge(a, b) {
            return Err(GraphError::EdgeNotFound { from: a, to: b });
        }

        let payload = self.sever(a, b);
        trace_graph!(from = %a, to = %b, edges = self.edge_count, "edge disconnected");
        Ok(payload)
    }

    /// Takes both halves of an existing edge out and releases them.
    fn sever(&mut self, a: NodeId, b: NodeId) -> Option<E> {
        let first = self.slots.get_mut(a).and_then(|node| node.disconnect(b));
        let second = self.slots.get_mut(b).and_then(|node| node.disconnect(a));
        debug_assert!(first.is_some() && second.is_some(), "half-edge mismatch {a} -- {b}");
        self.edge_count -= 1;

        let first = first.and_then(Connection::release);
        let second = second.and_then(Connection::release);
        first.or(second)
    }

    fn check_endpoints(&self, a: NodeId, b: NodeId) -> Result<()> {
        if !self.contains_node(a) {
            return Err(GraphError::NodeNotFound(a));
        }
        if !self.contains_node(b) {
            return Err(GraphError::NodeNotFound(b));
        }
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        Ok(())
    }

    /// Returns `true` if `a` and `b` are adjacent.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.slots.get(a).is_some_and(|node| node.is_adjacent(b))
    }

    /// The half of edge `a -- b` stored in `a`.
    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&Connection<E>> {
        self.slots.get(a)?.edge_to(b)
    }

    /// The payload of edge `a -- b`.
    pub fn edge_value(&self, a: NodeId, b: NodeId) -> Option<&E> {
        self.edge(a, b)?.value()
    }

    /// Mutable access to the payload of edge `a -- b`.
    ///
    /// The payload is shared, so the change is visible from both endpoints.
    pub fn edge_value_mut(&mut self, a: NodeId, b: NodeId) -> Option<&mut E> {
        let half = self.slots.get(a)?.edge_to(b)?;
        // SAFETY: both halves of every edge are owned by this graph, and
        // `&mut self` rules out any other live borrow of either of them.
        unsafe { half.value_mut_unchecked() }
    }

    /// Number of edges incident to `id`.
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.slots.get(id).map(Node::degree)
    }

    // Views -----------------------------------------------------------------

    /// Ids of the nodes adjacent to `id`.
    pub fn adjacent_nodes(&self, id: NodeId) -> Option<NodesView<'_, A>> {
        self.slots.get(id).map(Node::adjacent_nodes)
    }

    /// Half-edges stored in node `id`.
    pub fn edges(&self, id: NodeId) -> Option<EdgesView<'_, A>> {
        self.slots.get(id).map(Node::edges)
    }

    /// Nodes adjacent to `id`, resolved to references.
    pub fn neighbors(&self, id: NodeId) -> Option<NeighborsView<'_, T, E, A>> {
        let node = self.slots.get(id)?;
        Some(View::new(node.adjacency(), ToNode::new(self)))
    }
}

impl<T, E, A> Default for Graph<T, E, A>
where
    A: Adjacency<Payload = E>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, E, A> fmt::Debug for Graph<T, E, A>
where
    A: Adjacency<Payload = E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.slots.iter().collect::<Vec<_>>())
            .field("edge_count", &self.edge_count)
            .finish()
    }
}
