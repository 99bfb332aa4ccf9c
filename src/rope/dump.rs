use super::node::NodeId;
use super::Rope;

/// Max chars of leaf text kept in a [`NodeRecord`].
pub const PREVIEW_CHARS: usize = 16;

/// Position of a node relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Root,
    Left,
    Right,
}

/// Snapshot of one node, as produced by [`Rope::dump`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub depth: usize,
    pub role: Role,
    pub weight: usize,
    pub height: usize,
    pub total_len: usize,
    pub newlines: usize,
    /// Start of the text for leaves, `None` for internal nodes.
    pub preview: Option<String>,
}

impl NodeRecord {
    pub fn is_leaf(&self) -> bool {
        self.preview.is_some()
    }
}

impl Rope {
    /// Pre-order structural snapshot of the tree. Read only.
    pub fn dump(&self) -> Vec<NodeRecord> {
        let mut records = Vec::new();
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 0, Role::Root));
        }

        while let Some((id, depth, role)) = stack.pop() {
            let meta = self.arena.meta(id);
            let preview = self
                .arena
                .text(id)
                .map(|text| text.chars().take(PREVIEW_CHARS).collect());

            records.push(NodeRecord {
                id,
                depth,
                role,
                weight: meta.weight,
                height: meta.height,
                total_len: meta.total_len,
                newlines: meta.newlines,
                preview,
            });

            if let Some((left, right)) = self.arena.children(id) {
                stack.push((right, depth + 1, Role::Right));
                stack.push((left, depth + 1, Role::Left));
            }
        }

        records
    }
}
