use tracing::trace;

use super::node::{Arena, NodeId};

impl Arena {
    /// Lifts `y`'s left child into `y`'s place.
    ///
    /// ```text
    ///       y            x
    ///      / \          / \
    ///     x   C  ->    A   y
    ///    / \              / \
    ///   A   B            B   C
    /// ```
    ///
    /// Returns `x`, already linked into `y`'s former parent.
    pub(crate) fn rotate_right(&mut self, y: NodeId) -> NodeId {
        let x = self.left(y);
        let b = self.right(x);
        let parent = self.parent(y);
        trace!(%y, %x, "rotate right");

        self.set_left(y, b);
        self.set_right(x, y);
        self.replace_child(parent, y, x);

        self.recompute(y);
        self.recompute(x);
        x
    }

    /// Mirror of [`Arena::rotate_right`]: lifts `x`'s right child into `x`'s place.
    pub(crate) fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let y = self.right(x);
        let b = self.left(y);
        let parent = self.parent(x);
        trace!(%x, %y, "rotate left");

        self.set_right(x, b);
        self.set_left(y, x);
        self.replace_child(parent, x, y);

        self.recompute(x);
        self.recompute(y);
        y
    }
}
