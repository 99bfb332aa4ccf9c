//! AVL-balanced rope over a character sequence.
//!
//! Leaves hold immutable runs of text; internal nodes cache the length,
//! height and newline count of their subtrees so offset and line lookups
//! route in O(log n). All nodes live in an [`Arena`](node::Arena) and refer to
//! each other through [`NodeId`] handles; the parent handle is navigational
//! only.

mod balance;
mod builder;
mod dump;
mod join;
mod node;
mod query;
mod rotate;

pub use self::builder::RopeBuilder;
pub use self::dump::{NodeRecord, Role, PREVIEW_CHARS};
pub use self::node::{Metadata, NodeId};
pub use self::query::{Chars, Chunks};

use self::node::Arena;

#[derive(Clone, Debug, Default)]
pub struct Rope {
    arena: Arena,
    root: Option<NodeId>,
}

impl Rope {
    /// An empty rope: no root at all.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Metadata of the root, `None` for an empty rope.
    pub fn metadata(&self) -> Option<Metadata> {
        self.root.map(|root| *self.arena.meta(root))
    }

    /// Panics if any node carries stale metadata, violates the AVL bound or
    /// disagrees with its children about who its parent is.
    pub fn assert_valid(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.arena.len(), 0, "empty rope still owns nodes");
            return;
        };
        assert_eq!(self.arena.parent(root), None, "root {root} has a parent");

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let stored = *self.arena.meta(id);
            let derived = self.arena.derive(id);
            assert_eq!(stored, derived, "stale metadata at {id}");

            if let Some((left, right)) = self.arena.children(id) {
                let skew = self.arena.skew(id);
                assert!((-1..=1).contains(&skew), "skew {skew} at {id}");
                assert_eq!(self.arena.parent(left), Some(id), "left child of {id} lost its parent");
                assert_eq!(self.arena.parent(right), Some(id), "right child of {id} lost its parent");
                stack.push(right);
                stack.push(left);
            } else {
                assert!(stored.total_len > 0, "empty leaf {id}");
            }
        }
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.chars().eq(other.chars())
    }
}

impl Eq for Rope {}
