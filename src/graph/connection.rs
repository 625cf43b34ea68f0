//! Half-edges.
//!
//! An undirected edge between `a` and `b` is stored as two [`Connection`]s: one
//! in `a`'s adjacency collection pointing at `b`, and one in `b`'s pointing at
//! `a`. Both halves share a single payload through a [`TwinRc`], so the payload
//! is built once per edge and destroyed when the second half goes away.

use crate::alloc::TwinRc;
use crate::graph::NodeId;
use core::any::TypeId;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// One directed half of an undirected edge.
///
/// A connection never owns its target; it only records the target's
/// [`NodeId`]. It may hold one share of the edge payload.
///
/// A connection is in one of three states:
/// - normal: target set, payload share held;
/// - valueless: target set, no payload (`E = ()`, placeholders);
/// - blank: neither target nor payload ([`Connection::blank`], the default).
///
/// Equality and ordering look at the target first and only compare payloads
/// when both halves carry one, so a valueless half equals any half with the
/// same target. [`Hash`] mixes the payload in, which means such equal halves
/// can hash differently: never use a mix of valueless and valued halves as
/// keys of one hashed collection. The hashed adjacency backing keys halves by
/// their target id instead.
pub struct Connection<E> {
    pub(crate) target: NodeId,
    payload: Option<TwinRc<E>>,
}

/// Returns `true` if `E` is the void edge type `()`.
///
/// Other zero-sized types (edge-kind markers and the like) are real payloads.
#[inline(always)]
fn is_void<E: 'static>() -> bool {
    TypeId::of::<E>() == TypeId::of::<()>()
}

/// Builds both halves of a new edge between `first` and `second`.
///
/// The first returned connection targets `second` and belongs in `first`'s
/// adjacency collection; the second targets `first` and belongs in `second`'s.
/// For a payload-carrying `E`, `value` is moved into one shared allocation
/// owned by both halves. For `E = ()` nothing is allocated and both halves are
/// valueless.
pub fn make_connections<E: 'static>(first: NodeId, second: NodeId, value: E) -> (Connection<E>, Connection<E>) {
    if is_void::<E>() {
        return make_valueless_connections(first, second);
    }

    let (to_second, to_first) = TwinRc::pair(value);
    (
        Connection {
            target: second,
            payload: Some(to_second),
        },
        Connection {
            target: first,
            payload: Some(to_first),
        },
    )
}

/// Builds both halves of a new edge without a payload.
pub fn make_valueless_connections<E>(first: NodeId, second: NodeId) -> (Connection<E>, Connection<E>) {
    (Connection::valueless(second), Connection::valueless(first))
}

impl<E> Connection<E> {
    /// A connection to `target` that holds no payload.
    #[inline]
    pub const fn valueless(target: NodeId) -> Self {
        Self {
            target,
            payload: None,
        }
    }

    /// A connection with neither target nor payload.
    #[inline]
    pub const fn blank() -> Self {
        Self::valueless(NodeId::DANGLING)
    }

    /// The node this half points at, `None` for a blank connection.
    #[inline]
    pub fn target(&self) -> Option<NodeId> {
        (!self.target.is_dangling()).then_some(self.target)
    }

    /// The raw target; [`NodeId::DANGLING`] for a blank connection.
    #[inline]
    pub fn target_id(&self) -> NodeId {
        self.target
    }

    /// The shared edge payload, `None` if this half is valueless or blank.
    #[inline]
    pub fn value(&self) -> Option<&E> {
        self.payload.as_deref()
    }

    /// Returns `true` if this connection has no target.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.target.is_dangling()
    }

    /// Returns `true` if this connection holds no payload share.
    #[inline]
    pub fn is_valueless(&self) -> bool {
        self.payload.is_none()
    }

    /// Returns `true` if both connections own the same payload allocation.
    pub fn shares_payload_with(&self, other: &Self) -> bool {
        match (&self.payload, &other.payload) {
            (Some(a), Some(b)) => TwinRc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of halves still holding this connection's payload.
    pub fn payload_shares(&self) -> usize {
        self.payload.as_ref().map_or(0, TwinRc::shares)
    }

    /// Mutable access to the payload while the other half may still hold it.
    ///
    /// # Safety
    ///
    /// No other reference to the payload, through this half or its twin, may be
    /// alive for the returned lifetime.
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn value_mut_unchecked(&self) -> Option<&mut E> {
        match &self.payload {
            Some(share) => Some(share.value_mut()),
            None => None,
        }
    }

    /// Consumes this half, returning the payload if it was the last owner.
    pub fn release(self) -> Option<E> {
        self.payload.and_then(TwinRc::release)
    }
}

impl<E> Default for Connection<E> {
    fn default() -> Self {
        Self::blank()
    }
}

impl<E: fmt::Debug> fmt::Debug for Connection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("target", &self.target())
            .field("value", &self.value())
            .finish()
    }
}

// Halves compare by target first; payloads only break ties when both sides
// carry one.

impl<E: PartialEq> PartialEq for Connection<E> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
            && match (self.value(), other.value()) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
    }
}

impl<E: Eq> Eq for Connection<E> {}

impl<E: PartialOrd> PartialOrd for Connection<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.target.cmp(&other.target) {
            Ordering::Equal => match (self.value(), other.value()) {
                (Some(a), Some(b)) => a.partial_cmp(b),
                _ => Some(Ordering::Equal),
            },
            ord => Some(ord),
        }
    }
}

impl<E: Ord> Ord for Connection<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.target.cmp(&other.target).then_with(|| match (self.value(), other.value()) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => Ordering::Equal,
        })
    }
}

impl<E: Hash> Hash for Connection<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state);
        if let Some(value) = self.value() {
            value.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_pair_targets_are_mirrored() {
        let a = NodeId::new(0, 0);
        let b = NodeId::new(1, 0);
        let (to_b, to_a) = make_connections(a, b, 5u32);

        assert_eq!(to_b.target(), Some(b));
        assert_eq!(to_a.target(), Some(a));
        assert_eq!(to_b.value(), Some(&5));
        assert!(to_b.shares_payload_with(&to_a));
        assert_eq!(to_a.payload_shares(), 2);
    }

    #[test]
    fn test_unit_edges_are_valueless() {
        let (x, y) = make_connections(NodeId::new(0, 0), NodeId::new(1, 0), ());
        assert!(x.is_valueless());
        assert!(y.is_valueless());
        assert_eq!(x.payload_shares(), 0);
    }

    #[derive(Debug, PartialEq)]
    struct Marker;

    #[test]
    fn test_zero_sized_marker_is_a_payload() {
        let (x, y) = make_connections(NodeId::new(0, 0), NodeId::new(1, 0), Marker);
        assert_eq!(x.value(), Some(&Marker));
        assert_eq!(y.value(), Some(&Marker));
        assert!(x.shares_payload_with(&y));
        assert_eq!(x.release(), None);
        assert_eq!(y.release(), Some(Marker));
    }

    #[test]
    fn test_blank_state() {
        let blank = Connection::<i32>::blank();
        assert!(blank.is_blank());
        assert!(blank.is_valueless());
        assert_eq!(blank.target(), None);
        assert_eq!(blank.target_id(), NodeId::DANGLING);
        assert!(Connection::<i32>::default().is_blank());
    }

    #[test]
    fn test_blank_never_equals_normal() {
        let (normal, _) = make_connections(NodeId::new(0, 0), NodeId::new(3, 1), 1);
        assert_ne!(Connection::blank(), normal);
        assert_eq!(Connection::<i32>::blank(), Connection::blank());
    }

    #[test]
    fn test_ordering_is_target_then_value() {
        let n = NodeId::new(9, 0);
        let (low, _) = make_connections(n, NodeId::new(1, 0), 50);
        let (high, _) = make_connections(n, NodeId::new(2, 0), 10);
        assert!(low < high);

        let (same_a, _) = make_connections(n, NodeId::new(1, 0), 1);
        let (same_b, _) = make_connections(n, NodeId::new(1, 0), 2);
        assert!(same_a < same_b);
        assert_ne!(same_a, same_b);

        // A valueless half only compares by target.
        assert_eq!(Connection::valueless(NodeId::new(1, 0)), same_a);
    }

    #[test]
    fn test_equal_halves_may_hash_apart() {
        let target = NodeId::new(1, 0);
        let (valued, _) = make_connections(NodeId::new(0, 0), target, 7u8);
        let probe = Connection::<u8>::valueless(target);

        assert_eq!(probe, valued);
        assert_ne!(hash_of(&probe), hash_of(&valued));
    }

    #[test]
    fn test_hash_includes_payload() {
        let n = NodeId::new(0, 0);
        let (a, _) = make_connections(n, NodeId::new(1, 0), 1u8);
        let (b, _) = make_connections(n, NodeId::new(1, 0), 1u8);
        let (c, _) = make_connections(n, NodeId::new(1, 0), 2u8);

        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&c));
        assert_eq!(
            hash_of(&Connection::<u8>::valueless(NodeId::new(1, 0))),
            hash_of(&NodeId::new(1, 0))
        );
    }

    #[test]
    fn test_release_hands_payload_to_last_half() {
        let (x, y) = make_connections(NodeId::new(0, 0), NodeId::new(1, 0), String::from("x"));
        assert_eq!(x.release(), None);
        assert_eq!(y.release().as_deref(), Some("x"));
    }
}
