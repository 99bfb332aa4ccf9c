use std::fmt;
use std::iter::FusedIterator;
use std::str;

use super::node::{Arena, NodeId, NodeKind};
use super::Rope;
use crate::error::{RopeError, RopeResult};

impl Rope {
    pub fn len(&self) -> usize {
        self.metadata().map_or(0, |meta| meta.total_len)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, 0 when empty and 1 for a single leaf.
    pub fn height(&self) -> usize {
        self.arena.height(self.root)
    }

    /// Number of lines. An empty rope is a single empty line.
    pub fn line_count(&self) -> usize {
        self.metadata().map_or(0, |meta| meta.newlines) + 1
    }

    pub fn leaf_count(&self) -> usize {
        self.chunks().count()
    }

    /// Char at offset `index`, routed by node weights.
    pub fn index(&self, index: usize) -> RopeResult<char> {
        let (leaf, offset) = self.locate(index)?;
        self.arena
            .text(leaf)
            .and_then(|text| text.chars().nth(offset))
            .ok_or(RopeError::OutOfRange { index, len: self.len() })
    }

    /// Offset of the first char of line `line` (zero based).
    pub fn line_start(&self, line: usize) -> RopeResult<usize> {
        let count = self.line_count();
        if line >= count {
            return Err(RopeError::LineOutOfRange { line, count });
        }
        let Some(mut node) = self.root else {
            return Ok(0);
        };
        if line == 0 {
            return Ok(0);
        }

        // Find the char right after the `line`-th newline.
        let mut remaining = line;
        let mut offset = 0;
        while let Some((left, right)) = self.arena.children(node) {
            let left_newlines = self.arena.meta(left).newlines;
            if remaining <= left_newlines {
                node = left;
            } else {
                remaining -= left_newlines;
                offset += self.arena.meta(node).weight;
                node = right;
            }
        }

        let text = self.arena.text(node).unwrap_or_default();
        let newline = text
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == '\n')
            .nth(remaining - 1)
            .map(|(i, _)| i)
            .ok_or(RopeError::LineOutOfRange { line, count })?;
        Ok(offset + newline + 1)
    }

    /// Line containing offset `index`. `index == len()` is the end of the
    /// last line.
    pub fn char_to_line(&self, index: usize) -> RopeResult<usize> {
        let len = self.len();
        if index > len {
            return Err(RopeError::OutOfRange { index, len });
        }
        let Some(mut node) = self.root else {
            return Ok(0);
        };

        let mut remaining = index;
        let mut line = 0;
        while let Some((left, right)) = self.arena.children(node) {
            let weight = self.arena.meta(node).weight;
            if remaining < weight {
                node = left;
            } else {
                remaining -= weight;
                line += self.arena.meta(left).newlines;
                node = right;
            }
        }

        let text = self.arena.text(node).unwrap_or_default();
        Ok(line + text.chars().take(remaining).filter(|&c| c == '\n').count())
    }

    /// Text of line `line` without its trailing newline.
    pub fn line(&self, line: usize) -> RopeResult<String> {
        let start = self.line_start(line)?;
        Ok(self.chars_at(start)?.take_while(|&c| c != '\n').collect())
    }

    /// Leaf texts in order.
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks { arena: &self.arena, stack: self.root.into_iter().collect() }
    }

    pub fn chars(&self) -> Chars<'_> {
        Chars { chunks: self.chunks(), current: "".chars() }
    }

    /// Chars starting at offset `index`; `index == len()` yields nothing.
    pub fn chars_at(&self, index: usize) -> RopeResult<Chars<'_>> {
        let len = self.len();
        if index > len {
            return Err(RopeError::OutOfRange { index, len });
        }
        let (Some(mut node), false) = (self.root, index == len) else {
            let chunks = Chunks { arena: &self.arena, stack: Vec::new() };
            return Ok(Chars { chunks, current: "".chars() });
        };

        let mut pending = Vec::new();
        let mut remaining = index;
        while let Some((left, right)) = self.arena.children(node) {
            let weight = self.arena.meta(node).weight;
            if remaining < weight {
                pending.push(right);
                node = left;
            } else {
                remaining -= weight;
                node = right;
            }
        }

        let text = self.arena.text(node).unwrap_or_default();
        let start = text.char_indices().nth(remaining).map_or(text.len(), |(i, _)| i);
        Ok(Chars {
            chunks: Chunks { arena: &self.arena, stack: pending },
            current: text[start..].chars(),
        })
    }

    /// The whole text as one string.
    pub fn materialize(&self) -> String {
        let mut text = String::with_capacity(self.len());
        for chunk in self.chunks() {
            text.push_str(chunk);
        }
        text
    }

    /// Leaf holding offset `index` and the offset within that leaf.
    fn locate(&self, index: usize) -> RopeResult<(NodeId, usize)> {
        let len = self.len();
        let (Some(mut node), true) = (self.root, index < len) else {
            return Err(RopeError::OutOfRange { index, len });
        };

        let mut remaining = index;
        while let Some((left, right)) = self.arena.children(node) {
            let weight = self.arena.meta(node).weight;
            if remaining < weight {
                node = left;
            } else {
                remaining -= weight;
                node = right;
            }
        }
        Ok((node, remaining))
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

/// In-order iterator over leaf texts.
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    arena: &'a Arena,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            match &self.arena.get(id).kind {
                NodeKind::Leaf(text) => return Some(text),
                NodeKind::Internal { left, right } => {
                    self.stack.push(*right);
                    self.stack.push(*left);
                }
            }
        }
        None
    }
}

impl FusedIterator for Chunks<'_> {}

#[derive(Clone, Debug)]
pub struct Chars<'a> {
    chunks: Chunks<'a>,
    current: str::Chars<'a>,
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.current.next() {
                return Some(c);
            }
            self.current = self.chunks.next()?.chars();
        }
    }
}

impl FusedIterator for Chars<'_> {}
