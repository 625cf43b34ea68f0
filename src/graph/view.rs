//! Read-only projection views over an adjacency collection.
//!
//! Every view is the same [`View`] type: a borrowed backing collection plus a
//! [`Projection`] that maps each stored [`Connection`] to the element the view
//! exposes. A projection is a small `Copy` value and may carry fixed context
//! (see [`ToNode`], which carries the owning graph). Adding a new view over the
//! same collection only takes a new projection; `iter`, `len`, `front`, `back`
//! and indexing come for free.
//!
//! A view borrows its node, so the borrow checker rejects any structural change
//! to the adjacency collection while a view is alive.

use crate::graph::{Adjacency, Connection, Graph, Node, NodeId, RandomAccess};
use core::fmt;
use core::iter::FusedIterator;

/// Maps a stored connection to a view element.
pub trait Projection<'a, E: 'a>: Copy {
    /// The element type produced for each connection.
    type Output;

    /// Projects one connection.
    fn project(self, connection: &'a Connection<E>) -> Self::Output;
}

/// Projects a connection to its target id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToTarget;

impl<'a, E: 'a> Projection<'a, E> for ToTarget {
    type Output = NodeId;

    #[inline(always)]
    fn project(self, connection: &'a Connection<E>) -> NodeId {
        connection.target
    }
}

/// Projects a connection to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToEdge;

impl<'a, E: 'a> Projection<'a, E> for ToEdge {
    type Output = &'a Connection<E>;

    #[inline(always)]
    fn project(self, connection: &'a Connection<E>) -> &'a Connection<E> {
        connection
    }
}

/// Projects a connection to its shared payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToValue;

impl<'a, E: 'a> Projection<'a, E> for ToValue {
    type Output = Option<&'a E>;

    #[inline(always)]
    fn project(self, connection: &'a Connection<E>) -> Option<&'a E> {
        connection.value()
    }
}

/// Projects a connection to the target node, resolved through its graph.
pub struct ToNode<'a, T, E, A> {
    graph: &'a Graph<T, E, A>,
}

impl<'a, T, E, A> ToNode<'a, T, E, A> {
    pub(crate) fn new(graph: &'a Graph<T, E, A>) -> Self {
        Self { graph }
    }
}

impl<'a, T, E, A> Clone for ToNode<'a, T, E, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, E, A> Copy for ToNode<'a, T, E, A> {}

impl<'a, T, E: 'a, A> Projection<'a, E> for ToNode<'a, T, E, A>
where
    A: Adjacency<Payload = E>,
{
    type Output = &'a Node<T, E, A>;

    #[inline]
    fn project(self, connection: &'a Connection<E>) -> &'a Node<T, E, A> {
        self.graph.resolve(connection.target)
    }
}

/// A lazily projected view over an adjacency collection.
pub struct View<'a, A, P> {
    backing: &'a A,
    projection: P,
}

/// Adjacent node ids, in collection order.
pub type NodesView<'a, A> = View<'a, A, ToTarget>;
/// Incident half-edges, in collection order.
pub type EdgesView<'a, A> = View<'a, A, ToEdge>;
/// Edge payloads, in collection order.
pub type ValuesView<'a, A> = View<'a, A, ToValue>;
/// Adjacent nodes resolved through their graph.
pub type NeighborsView<'a, T, E, A> = View<'a, A, ToNode<'a, T, E, A>>;

impl<'a, A, P> View<'a, A, P>
where
    A: Adjacency + 'a,
    A::Payload: 'a,
    P: Projection<'a, A::Payload>,
{
    /// Builds a view over `backing` using `projection`.
    #[inline]
    pub fn new(backing: &'a A, projection: P) -> Self {
        Self {
            backing,
            projection,
        }
    }

    /// Iterates the projected elements.
    #[inline]
    pub fn iter(&self) -> Projected<A::Iter<'a>, P> {
        Projected {
            inner: Adjacency::iter(self.backing),
            projection: self.projection,
        }
    }

    /// Number of elements, forwarded from the backing collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if the backing collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// The first element, `None` on an empty view.
    #[inline]
    pub fn front(&self) -> Option<P::Output> {
        self.iter().next()
    }

    /// The last element, `None` on an empty view.
    #[inline]
    pub fn back(&self) -> Option<P::Output>
    where
        A::Iter<'a>: DoubleEndedIterator,
    {
        self.iter().next_back()
    }

    /// The element at `offset`, `None` if out of range.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<P::Output>
    where
        A: RandomAccess,
    {
        RandomAccess::get(self.backing, offset).map(|c| self.projection.project(c))
    }

    /// Reuses the same backing collection with a different projection.
    #[inline]
    pub fn with_projection<Q>(self, projection: Q) -> View<'a, A, Q>
    where
        Q: Projection<'a, A::Payload>,
    {
        View::new(self.backing, projection)
    }
}

impl<'a, A, P: Copy> Clone for View<'a, A, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A, P: Copy> Copy for View<'a, A, P> {}

impl<'a, A, P> IntoIterator for View<'a, A, P>
where
    A: Adjacency + 'a,
    A::Payload: 'a,
    P: Projection<'a, A::Payload>,
{
    type Item = P::Output;
    type IntoIter = Projected<A::Iter<'a>, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'v, 'a, A, P> IntoIterator for &'v View<'a, A, P>
where
    A: Adjacency + 'a,
    A::Payload: 'a,
    P: Projection<'a, A::Payload>,
{
    type Item = P::Output;
    type IntoIter = Projected<A::Iter<'a>, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A, P> fmt::Debug for View<'a, A, P>
where
    A: Adjacency + 'a,
    A::Payload: 'a,
    P: Projection<'a, A::Payload>,
    P::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator produced by a [`View`].
#[derive(Clone, Debug)]
pub struct Projected<I, P> {
    inner: I,
    projection: P,
}

impl<'a, E: 'a, I, P> Iterator for Projected<I, P>
where
    I: Iterator<Item = &'a Connection<E>>,
    P: Projection<'a, E>,
{
    type Item = P::Output;

    #[inline]
    fn next(&mut self) -> Option<P::Output> {
        let projection = self.projection;
        self.inner.next().map(|c| projection.project(c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<P::Output> {
        let projection = self.projection;
        self.inner.nth(n).map(|c| projection.project(c))
    }
}

impl<'a, E: 'a, I, P> DoubleEndedIterator for Projected<I, P>
where
    I: DoubleEndedIterator<Item = &'a Connection<E>>,
    P: Projection<'a, E>,
{
    #[inline]
    fn next_back(&mut self) -> Option<P::Output> {
        let projection = self.projection;
        self.inner.next_back().map(|c| projection.project(c))
    }
}

impl<'a, E: 'a, I, P> ExactSizeIterator for Projected<I, P>
where
    I: ExactSizeIterator<Item = &'a Connection<E>>,
    P: Projection<'a, E>,
{
}

impl<'a, E: 'a, I, P> FusedIterator for Projected<I, P>
where
    I: FusedIterator<Item = &'a Connection<E>>,
    P: Projection<'a, E>,
{
}
