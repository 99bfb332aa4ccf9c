use super::node::{Arena, NodeId};

impl Arena {
    /// Balance factor: `height(right) - height(left)`, 0 for a leaf.
    pub(crate) fn skew(&self, id: NodeId) -> isize {
        match self.children(id) {
            Some((left, right)) => {
                self.meta(right).height as isize - self.meta(left).height as isize
            }
            None => 0,
        }
    }

    /// Restores the AVL property at `node`, whose children are balanced but
    /// whose own skew may be off by one level. Returns the new subtree root,
    /// linked into `node`'s former parent.
    pub(crate) fn rebalance(&mut self, node: NodeId) -> NodeId {
        self.recompute(node);

        match self.skew(node) {
            -1..=1 => node,
            2 => {
                let right = self.right(node);
                if self.skew(right) < 0 {
                    self.rotate_right(right);
                }
                self.rotate_left(node)
            }
            -2 => {
                let left = self.left(node);
                if self.skew(left) > 0 {
                    self.rotate_left(left);
                }
                self.rotate_right(node)
            }
            skew => panic!("skew {skew} at {node} is more than one level off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `node(a, node(node(b, c), d))`: right-heavy by two with a
    /// left-heavy right child.
    fn right_left_case(arena: &mut Arena) -> NodeId {
        let a = arena.alloc_leaf("a");
        let b = arena.alloc_leaf("b");
        let c = arena.alloc_leaf("c");
        let d = arena.alloc_leaf("d");
        let bc = arena.alloc_internal(b, c);
        let inner = arena.alloc_internal(bc, d);
        arena.alloc_internal(a, inner)
    }

    #[test]
    fn balanced_node_is_untouched() {
        let mut arena = Arena::default();
        let a = arena.alloc_leaf("a");
        let b = arena.alloc_leaf("b");
        let root = arena.alloc_internal(a, b);

        assert_eq!(arena.rebalance(root), root);
        assert_eq!(arena.children(root), Some((a, b)));
    }

    #[test]
    fn right_right_case_single_rotation() {
        let mut arena = Arena::default();
        let a = arena.alloc_leaf("a");
        let b = arena.alloc_leaf("b");
        let c = arena.alloc_leaf("c");
        let d = arena.alloc_leaf("d");
        let cd = arena.alloc_internal(c, d);
        let bcd = arena.alloc_internal(b, cd);
        let top = arena.alloc_internal(a, bcd);

        assert_eq!(arena.skew(top), 2);
        let root = arena.rebalance(top);

        assert_eq!(root, bcd);
        assert_eq!(arena.skew(root), 0);
        assert_eq!(arena.meta(root).height, 3);
        assert_eq!(arena.children(root), Some((top, cd)));
        assert_eq!(arena.children(top), Some((a, b)));
    }

    #[test]
    fn right_left_case_double_rotation() {
        let mut arena = Arena::default();
        let top = right_left_case(&mut arena);
        let inner = arena.right(top);
        let bc = arena.left(inner);

        assert_eq!(arena.skew(top), 2);
        assert_eq!(arena.skew(inner), -1);

        let root = arena.rebalance(top);

        assert_eq!(root, bc);
        assert_eq!(arena.parent(root), None);
        assert_eq!(arena.meta(root).height, 3);
        assert_eq!(arena.meta(root).total_len, 4);
        assert_eq!(arena.skew(root), 0);
        assert_eq!(arena.children(root), Some((top, inner)));
    }

    #[test]
    fn left_right_case_double_rotation() {
        let mut arena = Arena::default();
        let a = arena.alloc_leaf("a");
        let b = arena.alloc_leaf("b");
        let c = arena.alloc_leaf("c");
        let d = arena.alloc_leaf("d");
        let bc = arena.alloc_internal(b, c);
        let inner = arena.alloc_internal(a, bc);
        let top = arena.alloc_internal(inner, d);

        assert_eq!(arena.skew(top), -2);
        let root = arena.rebalance(top);

        assert_eq!(root, bc);
        assert_eq!(arena.children(root), Some((inner, top)));
        assert_eq!(arena.children(inner), Some((a, b)));
        assert_eq!(arena.children(top), Some((c, d)));
        assert_eq!(arena.meta(root).weight, 2);
    }

    #[test]
    #[should_panic(expected = "more than one level off")]
    fn skew_of_three_is_fatal() {
        let mut arena = Arena::default();
        let a = arena.alloc_leaf("a");
        let b = arena.alloc_leaf("b");
        let c = arena.alloc_leaf("c");
        let d = arena.alloc_leaf("d");
        let e = arena.alloc_leaf("e");
        let de = arena.alloc_internal(d, e);
        let cde = arena.alloc_internal(c, de);
        let bcde = arena.alloc_internal(b, cde);
        let top = arena.alloc_internal(a, bcde);

        arena.rebalance(top);
    }
}
