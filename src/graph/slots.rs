//! Generational slot storage for nodes.
//!
//! Nodes never move once inserted: a slot is only vacated by removal. Each slot
//! carries a generation counter, bumped on removal, so a stale [`NodeId`] can
//! never resolve to a newer occupant (ABA protection). A slot whose generation
//! is exhausted is retired instead of wrapping around.

use crate::graph::NodeId;

enum Entry<V> {
    Occupied { generation: u32, value: V },
    Vacant { generation: u32, next_free: u32 },
}

/// Sentinel for an empty free list.
const NO_FREE: u32 = u32::MAX;

pub(crate) struct Slots<V> {
    entries: Vec<Entry<V>>,
    free_head: u32,
    len: usize,
}

impl<V> Slots<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free_head: NO_FREE,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Inserts the value built by `make` from its freshly issued id.
    ///
    /// # Panics
    ///
    /// Panics if `u32::MAX` slots already exist; that index is reserved for
    /// [`NodeId::DANGLING`].
    pub(crate) fn insert_with<F>(&mut self, make: F) -> NodeId
    where
        F: FnOnce(NodeId) -> V,
    {
        if self.free_head != NO_FREE {
            let index = self.free_head;
            let slot = &mut self.entries[index as usize];
            let (generation, next_free) = match *slot {
                Entry::Vacant {
                    generation,
                    next_free,
                } => (generation, next_free),
                Entry::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            };

            let id = NodeId::new(index, generation);
            *slot = Entry::Occupied {
                generation,
                value: make(id),
            };
            self.free_head = next_free;
            self.len += 1;
            id
        } else {
            let index = u32::try_from(self.entries.len())
                .ok()
                .filter(|&i| i < NO_FREE)
                .unwrap_or_else(|| panic!("node slots exhausted"));

            let id = NodeId::new(index, 0);
            self.entries.push(Entry::Occupied {
                generation: 0,
                value: make(id),
            });
            self.len += 1;
            id
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&V> {
        match self.entries.get(id.index())? {
            Entry::Occupied { generation, value } if *generation == id.generation() => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut V> {
        match self.entries.get_mut(id.index())? {
            Entry::Occupied { generation, value } if *generation == id.generation() => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Mutable access to two distinct live slots at once.
    pub(crate) fn get_pair_mut(&mut self, a: NodeId, b: NodeId) -> Option<(&mut V, &mut V)> {
        if a.index() == b.index() || !self.contains(a) || !self.contains(b) {
            return None;
        }

        let (lo, hi, swapped) = if a.index() < b.index() {
            (a.index(), b.index(), false)
        } else {
            (b.index(), a.index(), true)
        };
        let (head, tail) = self.entries.split_at_mut(hi);
        let (first, second) = match (&mut head[lo], &mut tail[0]) {
            (Entry::Occupied { value: x, .. }, Entry::Occupied { value: y, .. }) => (x, y),
            _ => return None,
        };

        Some(if swapped { (second, first) } else { (first, second) })
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<V> {
        if !self.contains(id) {
            return None;
        }

        // Retired slots stay vacant and off the free list for good.
        let next_generation = id.generation().checked_add(1);
        let vacant = Entry::Vacant {
            generation: next_generation.unwrap_or(u32::MAX),
            next_free: if next_generation.is_some() { self.free_head } else { NO_FREE },
        };
        match core::mem::replace(&mut self.entries[id.index()], vacant) {
            Entry::Occupied { value, .. } => {
                if next_generation.is_some() {
                    self.free_head = id.index() as u32;
                } else {
                    trace_graph!(index = id.index(), "slot retired");
                }
                self.len -= 1;
                Some(value)
            }
            Entry::Vacant { .. } => unreachable!("checked occupied above"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.free_head = NO_FREE;
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Occupied { value, .. } => Some(value),
            Entry::Vacant { .. } => None,
        })
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.entries.iter_mut().filter_map(|entry| match entry {
            Entry::Occupied { value, .. } => Some(value),
            Entry::Vacant { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let mut slots = Slots::with_capacity(4);
        let a = slots.insert_with(|_| 'a');
        let b = slots.insert_with(|_| 'b');

        assert_eq!(slots.len(), 2);
        assert_eq!(slots.get(a), Some(&'a'));
        assert_eq!(slots.remove(a), Some('a'));
        assert_eq!(slots.get(a), None);
        assert_eq!(slots.remove(a), None);
        assert_eq!(slots.get(b), Some(&'b'));
    }

    #[test]
    fn test_reused_slot_gets_new_generation() {
        let mut slots = Slots::with_capacity(0);
        let old = slots.insert_with(|id| id);
        slots.remove(old);

        let new = slots.insert_with(|id| id);
        assert_eq!(old.index(), new.index());
        assert_ne!(old, new);
        assert!(slots.get(old).is_none());
        assert_eq!(slots.get(new), Some(&new));
    }

    #[test]
    fn test_exhausted_slot_is_retired() {
        let mut slots = Slots::with_capacity(0);
        let first = slots.insert_with(|_| 'a');
        let last = NodeId::new(first.index() as u32, u32::MAX);
        slots.entries[first.index()] = Entry::Occupied {
            generation: u32::MAX,
            value: 'z',
        };

        assert_eq!(slots.remove(last), Some('z'));
        assert!(slots.get(last).is_none());

        let next = slots.insert_with(|_| 'b');
        assert_ne!(next.index(), last.index());
        assert_eq!(slots.len(), 1);
        assert_eq!(slots.iter().copied().collect::<Vec<_>>(), vec!['b']);
    }

    #[test]
    fn test_pair_mut_in_either_order() {
        let mut slots = Slots::with_capacity(0);
        let a = slots.insert_with(|_| 1);
        let b = slots.insert_with(|_| 2);

        let (x, y) = slots.get_pair_mut(b, a).unwrap();
        assert_eq!((*x, *y), (2, 1));
        std::mem::swap(x, y);
        assert_eq!(slots.get(a), Some(&2));

        assert!(slots.get_pair_mut(a, a).is_none());
    }

    #[test]
    fn test_iter_skips_vacant() {
        let mut slots = Slots::with_capacity(0);
        let ids: Vec<_> = (0..5).map(|i| slots.insert_with(move |_| i)).collect();
        slots.remove(ids[1]);
        slots.remove(ids[3]);

        assert_eq!(slots.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4]);
        for v in slots.iter_mut() {
            *v *= 10;
        }
        assert_eq!(slots.iter().copied().collect::<Vec<_>>(), vec![0, 20, 40]);
    }
}
