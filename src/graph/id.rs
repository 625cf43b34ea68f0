use core::fmt;

/// Stable identity of a node inside its graph.
///
/// Pairs the node's slot index with the slot generation at insertion time. The
/// generation is bumped whenever a slot is vacated, so two simultaneously alive
/// nodes never share an id and a removed node's id never comes back.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Target of a blank connection. Never issued to a live node.
    pub const DANGLING: NodeId = NodeId {
        index: u32::MAX,
        generation: u32::MAX,
    };

    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in the owning graph.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Generation of the slot when this id was issued.
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Returns `true` for [`NodeId::DANGLING`].
    #[inline]
    pub const fn is_dangling(self) -> bool {
        self.index == u32::MAX && self.generation == u32::MAX
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::DANGLING
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dangling() {
            f.write_str("NodeId(dangling)")
        } else {
            write!(f, "NodeId({}v{})", self.index, self.generation)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}v{}", self.index, self.generation)
    }
}
