use std::fmt;

/// Handle of a node inside a rope's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }

    pub(crate) fn shifted(self, offset: usize) -> Self {
        Self(self.0 + offset)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Derived statistics every node carries about its subtree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Chars in the left subtree, or in the text for a leaf.
    pub weight: usize,
    pub total_len: usize,
    pub height: usize,
    pub newlines: usize,
}

impl Metadata {
    fn of_text(text: &str) -> Self {
        let len = text.chars().count();
        Self {
            weight: len,
            total_len: len,
            height: 1,
            newlines: text.chars().filter(|&c| c == '\n').count(),
        }
    }

    fn of_children(left: &Metadata, right: &Metadata) -> Self {
        Self {
            weight: left.total_len,
            total_len: left.total_len + right.total_len,
            height: 1 + left.height.max(right.height),
            newlines: left.newlines + right.newlines,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum NodeKind {
    Leaf(String),
    Internal { left: NodeId, right: NodeId },
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) meta: Metadata,
}

impl Node {
    pub(crate) fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal { left, right } => Some((left, right)),
        }
    }
}

/// Owns every node of one rope. Handles stay valid for the arena's lifetime;
/// nodes are never freed individually.
#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn meta(&self, id: NodeId) -> &Metadata {
        &self.get(id).meta
    }

    pub(crate) fn height(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self.meta(id).height)
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    pub(crate) fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        self.get(id).children()
    }

    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        match self.children(id) {
            Some((left, _)) => left,
            None => panic!("leaf {id} has no left child"),
        }
    }

    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        match self.children(id) {
            Some((_, right)) => right,
            None => panic!("leaf {id} has no right child"),
        }
    }

    pub(crate) fn text(&self, id: NodeId) -> Option<&str> {
        match &self.get(id).kind {
            NodeKind::Leaf(text) => Some(text),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Allocates a detached leaf. Callers never pass empty text.
    pub(crate) fn alloc_leaf(&mut self, text: &str) -> NodeId {
        debug_assert!(!text.is_empty(), "empty leaves are not allowed");
        self.push(Node {
            meta: Metadata::of_text(text),
            kind: NodeKind::Leaf(text.to_owned()),
            parent: None,
        })
    }

    /// Allocates an internal node over two subtrees and claims them as children.
    pub(crate) fn alloc_internal(&mut self, left: NodeId, right: NodeId) -> NodeId {
        let id = self.push(Node {
            meta: Metadata::of_children(self.meta(left), self.meta(right)),
            kind: NodeKind::Internal { left, right },
            parent: None,
        });
        self.get_mut(left).parent = Some(id);
        self.get_mut(right).parent = Some(id);
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn set_left(&mut self, parent: NodeId, child: NodeId) {
        match &mut self.get_mut(parent).kind {
            NodeKind::Internal { left, .. } => *left = child,
            NodeKind::Leaf(_) => panic!("cannot attach a left child to leaf {parent}"),
        }
        self.get_mut(child).parent = Some(parent);
    }

    pub(crate) fn set_right(&mut self, parent: NodeId, child: NodeId) {
        match &mut self.get_mut(parent).kind {
            NodeKind::Internal { right, .. } => *right = child,
            NodeKind::Leaf(_) => panic!("cannot attach a right child to leaf {parent}"),
        }
        self.get_mut(child).parent = Some(parent);
    }

    /// Points whichever slot of `parent` held `old` at `new`. With no parent,
    /// `new` becomes a detached subtree root.
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        let Some(parent) = parent else {
            self.get_mut(new).parent = None;
            return;
        };
        match self.children(parent) {
            Some((left, _)) if left == old => self.set_left(parent, new),
            Some((_, right)) if right == old => self.set_right(parent, new),
            _ => panic!("{old} is not a child of {parent}"),
        }
    }

    /// Metadata `id` should carry given its text or its children's metadata.
    pub(crate) fn derive(&self, id: NodeId) -> Metadata {
        match &self.get(id).kind {
            NodeKind::Leaf(text) => Metadata::of_text(text),
            NodeKind::Internal { left, right } => {
                Metadata::of_children(self.meta(*left), self.meta(*right))
            }
        }
    }

    pub(crate) fn recompute(&mut self, id: NodeId) {
        if self.children(id).is_none() {
            return;
        }
        let meta = self.derive(id);
        self.get_mut(id).meta = meta;
    }

    /// Moves every node of `other` into this arena. Returns the offset that
    /// must be added to `other`'s handles.
    pub(crate) fn absorb(&mut self, other: Arena) -> usize {
        let offset = self.nodes.len();
        self.nodes.extend(other.nodes.into_iter().map(|mut node| {
            node.parent = node.parent.map(|id| id.shifted(offset));
            if let NodeKind::Internal { left, right } = &mut node.kind {
                *left = left.shifted(offset);
                *right = right.shifted(offset);
            }
            node
        }));
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_metadata_counts_chars_and_newlines() {
        let mut arena = Arena::default();
        let leaf = arena.alloc_leaf("ab\ncé\n");

        assert_eq!(
            *arena.meta(leaf),
            Metadata { weight: 6, total_len: 6, height: 1, newlines: 2 }
        );
    }

    #[test]
    fn internal_metadata_aggregates_children() {
        let mut arena = Arena::default();
        let a = arena.alloc_leaf("line1\n");
        let b = arena.alloc_leaf("li");
        let c = arena.alloc_leaf("ne2\n");
        let bc = arena.alloc_internal(b, c);
        let root = arena.alloc_internal(a, bc);

        assert_eq!(
            *arena.meta(root),
            Metadata { weight: 6, total_len: 12, height: 3, newlines: 2 }
        );
        assert_eq!(arena.parent(bc), Some(root));
        assert_eq!(arena.parent(b), Some(bc));
        assert_eq!(arena.parent(root), None);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut arena = Arena::default();
        let a = arena.alloc_leaf("x\n");
        let b = arena.alloc_leaf("yz");
        let root = arena.alloc_internal(a, b);
        let before = *arena.meta(root);

        arena.recompute(root);
        arena.recompute(root);

        assert_eq!(*arena.meta(root), before);
        assert_eq!(arena.derive(a), *arena.meta(a));
    }

    #[test]
    fn replace_child_rewrites_matching_slot() {
        let mut arena = Arena::default();
        let a = arena.alloc_leaf("a");
        let b = arena.alloc_leaf("b");
        let root = arena.alloc_internal(a, b);
        let c = arena.alloc_leaf("c");

        arena.replace_child(Some(root), b, c);

        assert_eq!(arena.children(root), Some((a, c)));
        assert_eq!(arena.parent(c), Some(root));
    }

    #[test]
    #[should_panic(expected = "has no left child")]
    fn leaf_has_no_children() {
        let mut arena = Arena::default();
        let a = arena.alloc_leaf("a");
        arena.left(a);
    }

    #[test]
    fn absorb_shifts_handles() {
        let mut first = Arena::default();
        first.alloc_leaf("a");

        let mut second = Arena::default();
        let x = second.alloc_leaf("x");
        let y = second.alloc_leaf("y");
        let root = second.alloc_internal(x, y);

        let offset = first.absorb(second);
        let root = root.shifted(offset);

        assert_eq!(offset, 1);
        assert_eq!(first.children(root), Some((x.shifted(1), y.shifted(1))));
        assert_eq!(first.parent(x.shifted(1)), Some(root));
        assert_eq!(first.text(y.shifted(1)), Some("y"));
    }
}
