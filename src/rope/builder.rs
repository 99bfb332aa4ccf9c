use tracing::debug;

use super::Rope;

/// Folds a stream of text chunks into one balanced rope.
///
/// Each chunk becomes a leaf joined onto the right of the running rope, so
/// every push costs O(log n). Chunk boundaries have no effect on the text.
#[derive(Debug, Default)]
pub struct RopeBuilder {
    rope: Rope,
    chunks: usize,
}

impl RopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: AsRef<str>>(&mut self, chunk: S) -> &mut Self {
        let chunk = chunk.as_ref();
        if !chunk.is_empty() {
            self.rope.append(chunk);
            self.chunks += 1;
        }
        self
    }

    /// Number of non-empty chunks pushed so far.
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    pub fn finish(self) -> Rope {
        debug!(
            chunks = self.chunks,
            len = self.rope.len(),
            height = self.rope.height(),
            "rope built"
        );
        self.rope
    }
}

impl Rope {
    /// Appends at the end by splicing the new leaf beside the rightmost leaf,
    /// then rebalancing bottom-up along the parent links.
    ///
    /// This only works because the insertion point is always the rightmost
    /// position; [`Rope::append`] is the general form and produces the same
    /// text.
    pub fn append_rightmost(&mut self, chunk: &str) {
        if chunk.is_empty() {
            return;
        }
        let leaf = self.arena.alloc_leaf(chunk);
        let Some(root) = self.root else {
            self.root = Some(leaf);
            return;
        };

        let mut last = root;
        while let Some((_, right)) = self.arena.children(last) {
            last = right;
        }

        let parent = self.arena.parent(last);
        let spliced = self.arena.alloc_internal(last, leaf);
        self.arena.replace_child(parent, last, spliced);

        let mut top = spliced;
        let mut cursor = parent;
        while let Some(node) = cursor {
            cursor = self.arena.parent(node);
            top = self.arena.rebalance(node);
        }
        self.root = Some(top);
    }
}

impl<'a> FromIterator<&'a str> for Rope {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut builder = RopeBuilder::new();
        for chunk in iter {
            builder.push(chunk);
        }
        builder.finish()
    }
}

impl FromIterator<String> for Rope {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut builder = RopeBuilder::new();
        for chunk in iter {
            builder.push(chunk);
        }
        builder.finish()
    }
}

impl<'a> Extend<&'a str> for Rope {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for chunk in iter {
            self.append(chunk);
        }
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        let mut rope = Rope::new();
        rope.append(text);
        rope
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Rope::from(text.as_str())
    }
}
