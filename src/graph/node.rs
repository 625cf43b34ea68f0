//! Graph nodes.
//!
//! A [`Node`] lives in a slot of its [`Graph`](crate::graph::Graph) for its whole
//! life and is never cloned or moved out, so its [`NodeId`] stays fixed. Edge
//! bookkeeping (`connect`/`disconnect`) is reserved to the graph, which always
//! updates both endpoints together.

use crate::graph::view::{EdgesView, NodesView, ToEdge, ToTarget, ToValue, ValuesView, View};
use crate::graph::{make_connections, make_valueless_connections, Adjacency, Connection, NodeId};
use core::fmt;

/// A vertex holding a value of type `T` and its half-edges.
///
/// `T = ()` gives a node without a value. `A` is the adjacency collection;
/// its iteration order is the order of every view.
pub struct Node<T, E = (), A = Vec<Connection<E>>> {
    id: NodeId,
    value: T,
    connections: A,
    _edge: core::marker::PhantomData<fn() -> E>,
}

impl<T, E, A> Node<T, E, A>
where
    A: Adjacency<Payload = E>,
{
    pub(crate) fn new(id: NodeId, value: T) -> Self {
        Self {
            id,
            value,
            connections: A::default(),
            _edge: core::marker::PhantomData,
        }
    }

    /// The node's identity.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the node's value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Number of incident edges.
    #[inline]
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// Returns `true` if the node has no incident edges.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.connections.is_empty()
    }

    /// Returns `true` if an edge to `other` exists.
    #[inline]
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.connections.contains(other)
    }

    /// The half-edge from this node to `other`.
    #[inline]
    pub fn edge_to(&self, other: NodeId) -> Option<&Connection<E>> {
        self.connections.find(other)
    }

    /// Ids of adjacent nodes.
    pub fn adjacent_nodes(&self) -> NodesView<'_, A> {
        View::new(&self.connections, ToTarget)
    }

    /// Incident half-edges.
    pub fn edges(&self) -> EdgesView<'_, A> {
        View::new(&self.connections, ToEdge)
    }

    /// Payloads of incident edges; `None` entries are valueless edges.
    pub fn edge_values(&self) -> ValuesView<'_, A> {
        View::new(&self.connections, ToValue)
    }

    pub(crate) fn adjacency(&self) -> &A {
        &self.connections
    }

    /// Creates the edge `self -- other` and installs one half on each side.
    ///
    /// The caller checks that the nodes are distinct and not yet adjacent.
    pub(crate) fn connect(&mut self, other: &mut Self, value: E)
    where
        E: 'static,
    {
        debug_assert!(!self.is_adjacent(other.id), "parallel edge {} -- {}", self.id, other.id);
        let (to_other, to_self) = make_connections(self.id, other.id, value);
        self.connections.insert(to_other);
        other.connections.insert(to_self);
    }

    /// Like [`Node::connect`] but without a payload.
    pub(crate) fn connect_valueless(&mut self, other: &mut Self) {
        debug_assert!(!self.is_adjacent(other.id), "parallel edge {} -- {}", self.id, other.id);
        let (to_other, to_self) = make_valueless_connections(self.id, other.id);
        self.connections.insert(to_other);
        other.connections.insert(to_self);
    }

    /// Removes this node's half of the edge to `other`.
    ///
    /// The other endpoint keeps its half; the caller removes it as well.
    pub(crate) fn disconnect(&mut self, other: NodeId) -> Option<Connection<E>> {
        self.connections.remove(other)
    }

    /// Removes every half held by this node, handing each one to `f`.
    pub(crate) fn disconnect_all<F>(&mut self, f: F)
    where
        F: FnMut(Connection<E>),
    {
        self.connections.drain_into(f);
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug, E, A> fmt::Debug for Node<T, E, A>
where
    A: Adjacency<Payload = E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("adjacent", &self.adjacent_nodes())
            .finish()
    }
}
