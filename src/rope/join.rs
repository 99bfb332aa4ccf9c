use std::mem;

use super::node::{Arena, NodeId};
use super::Rope;

impl Arena {
    /// Joins two balanced subtrees of this arena, `left` before `right`.
    ///
    /// Walks down the inner spine of the taller tree until the heights
    /// differ by at most one, joins there with a fresh node and rebalances
    /// on the way back up. Runs in O(|height(left) - height(right)|).
    pub(crate) fn join(&mut self, left: Option<NodeId>, right: Option<NodeId>) -> Option<NodeId> {
        let root = match (left, right) {
            (None, right) => return right,
            (left, None) => return left,
            (Some(left), Some(right)) => self.join_nonempty(left, right),
        };
        debug_assert_eq!(self.parent(root), None, "joined root {root} kept a parent");
        Some(root)
    }

    fn join_nonempty(&mut self, left: NodeId, right: NodeId) -> NodeId {
        let skew = self.meta(right).height as isize - self.meta(left).height as isize;

        if skew >= 2 {
            let inner = self.left(right);
            let joined = self.join_nonempty(left, inner);
            self.set_left(right, joined);
            self.rebalance(right)
        } else if skew <= -2 {
            let inner = self.right(left);
            let joined = self.join_nonempty(inner, right);
            self.set_right(left, joined);
            self.rebalance(left)
        } else {
            self.alloc_internal(left, right)
        }
    }
}

impl Rope {
    /// Concatenates two ropes, `self` first.
    ///
    /// The smaller rope's nodes are moved into the larger rope's arena, then
    /// the two trees are joined in time proportional to their height
    /// difference. Concatenating with an empty rope returns the other one
    /// unchanged.
    pub fn concat(self, other: Rope) -> Rope {
        let (mut arena, left, right) = if self.arena.len() >= other.arena.len() {
            let mut arena = self.arena;
            let offset = arena.absorb(other.arena);
            (arena, self.root, other.root.map(|id| id.shifted(offset)))
        } else {
            let mut arena = other.arena;
            let offset = arena.absorb(self.arena);
            (arena, self.root.map(|id| id.shifted(offset)), other.root)
        };

        let root = arena.join(left, right);
        Rope { arena, root }
    }

    /// Appends `other` in place. See [`Rope::concat`].
    pub fn append_rope(&mut self, other: Rope) {
        *self = mem::take(self).concat(other);
    }

    /// Appends one chunk of text as a new leaf, joined on the right.
    /// Empty chunks are ignored.
    pub fn append(&mut self, chunk: &str) {
        if chunk.is_empty() {
            return;
        }
        let leaf = self.arena.alloc_leaf(chunk);
        self.root = self.arena.join(self.root, Some(leaf));
    }
}
