//! Backing collections for a node's half-edges.
//!
//! The iteration order of a node's views is whatever its adjacency collection
//! yields; the core imposes none of its own. Three backings are provided:
//! - `Vec<Connection<E>>`: insertion order, random access;
//! - `BTreeSet<Connection<E>>`: ordered by target id;
//! - `HashMap<NodeId, Connection<E>, S>`: hashed order, keyed by target id.

use crate::graph::{Connection, NodeId};
use std::collections::btree_set;
use std::collections::hash_map;
use std::collections::{BTreeSet, HashMap};
use std::hash::BuildHasher;
use std::slice;

/// A collection of half-edges owned by one node.
///
/// Implementations never hold two connections with the same target.
pub trait Adjacency: Default {
    /// Edge payload type carried by the stored connections.
    type Payload;

    /// Iterator over the stored connections in collection order.
    type Iter<'a>: Iterator<Item = &'a Connection<Self::Payload>> + ExactSizeIterator + Clone
    where
        Self: 'a;

    /// Number of stored connections.
    fn len(&self) -> usize;

    /// Returns `true` if no connection is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the stored connections.
    fn iter(&self) -> Self::Iter<'_>;

    /// Finds the connection pointing at `target`.
    fn find(&self, target: NodeId) -> Option<&Connection<Self::Payload>>;

    /// Returns `true` if a connection points at `target`.
    fn contains(&self, target: NodeId) -> bool {
        self.find(target).is_some()
    }

    /// Stores `connection`. The caller guarantees its target is not yet present.
    fn insert(&mut self, connection: Connection<Self::Payload>);

    /// Removes and returns the connection pointing at `target`.
    fn remove(&mut self, target: NodeId) -> Option<Connection<Self::Payload>>;

    /// Removes every connection, handing each one to `f`.
    fn drain_into<F>(&mut self, f: F)
    where
        F: FnMut(Connection<Self::Payload>);
}

/// An adjacency collection that supports indexing by position.
pub trait RandomAccess: Adjacency {
    /// The connection at position `index`, if in range.
    fn get(&self, index: usize) -> Option<&Connection<Self::Payload>>;
}

impl<E> Adjacency for Vec<Connection<E>> {
    type Payload = E;
    type Iter<'a> = slice::Iter<'a, Connection<E>> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn find(&self, target: NodeId) -> Option<&Connection<E>> {
        self.as_slice().iter().find(|c| c.target == target)
    }

    #[inline]
    fn insert(&mut self, connection: Connection<E>) {
        self.push(connection);
    }

    fn remove(&mut self, target: NodeId) -> Option<Connection<E>> {
        let pos = self.as_slice().iter().position(|c| c.target == target)?;
        // Order-preserving: insertion order is observable through the views.
        Some(Vec::remove(self, pos))
    }

    fn drain_into<F>(&mut self, f: F)
    where
        F: FnMut(Connection<E>),
    {
        self.drain(..).for_each(f);
    }
}

impl<E> RandomAccess for Vec<Connection<E>> {
    #[inline]
    fn get(&self, index: usize) -> Option<&Connection<E>> {
        self.as_slice().get(index)
    }
}

impl<E: Ord> Adjacency for BTreeSet<Connection<E>> {
    type Payload = E;
    type Iter<'a> = btree_set::Iter<'a, Connection<E>> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }

    fn find(&self, target: NodeId) -> Option<&Connection<E>> {
        // A valueless probe compares equal to any half with the same target.
        BTreeSet::get(self, &Connection::valueless(target))
    }

    #[inline]
    fn insert(&mut self, connection: Connection<E>) {
        BTreeSet::insert(self, connection);
    }

    fn remove(&mut self, target: NodeId) -> Option<Connection<E>> {
        self.take(&Connection::valueless(target))
    }

    fn drain_into<F>(&mut self, f: F)
    where
        F: FnMut(Connection<E>),
    {
        core::mem::take(self).into_iter().for_each(f);
    }
}

// Keyed by target: `Connection`'s own hash mixes in the payload, which a
// valueless lookup key cannot reproduce.
impl<E, S> Adjacency for HashMap<NodeId, Connection<E>, S>
where
    S: BuildHasher + Default,
{
    type Payload = E;
    type Iter<'a> = hash_map::Values<'a, NodeId, Connection<E>> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.values()
    }

    #[inline]
    fn find(&self, target: NodeId) -> Option<&Connection<E>> {
        HashMap::get(self, &target)
    }

    #[inline]
    fn insert(&mut self, connection: Connection<E>) {
        HashMap::insert(self, connection.target, connection);
    }

    #[inline]
    fn remove(&mut self, target: NodeId) -> Option<Connection<E>> {
        HashMap::remove(self, &target)
    }

    fn drain_into<F>(&mut self, mut f: F)
    where
        F: FnMut(Connection<E>),
    {
        self.drain().for_each(|(_, connection)| f(connection));
    }
}
