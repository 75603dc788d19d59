use crate::*;
use std::collections::VecDeque;

/// Breadth-first walk, left child before right child.
pub struct Bfs<'t, T> {
    tree: &'t IntervalTree<T>,
    queue: VecDeque<NodeId>,
}

impl<'t, T> Iterator for Bfs<'t, T> {
    type Item = NodeId;
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        self.queue.extend(self.tree[&id].children());
        Some(id)
    }
}

/// In-order walk; medians come out strictly ascending.
pub struct Inorder<'t, T> {
    tree: &'t IntervalTree<T>,
    stack: Vec<NodeId>,
    next: Option<NodeId>,
}

impl<'t, T> Iterator for Inorder<'t, T> {
    type Item = NodeId;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.next {
            self.stack.push(id);
            self.next = self.tree[&id].left;
        }
        let id = self.stack.pop()?;
        self.next = self.tree[&id].right;
        Some(id)
    }
}

impl<T> IntervalTree<T> {
    pub fn bfs(&self) -> Bfs<'_, T> {
        Bfs { tree: self, queue: VecDeque::from([self.root]) }
    }
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder { tree: self, stack: Vec::new(), next: Some(self.root) }
    }
    /// Ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self[&id].parent, |p| self[p].parent)
    }
    /// All intervals stored in the subtree rooted at `id`.
    pub fn subtree_segments(&self, id: NodeId) -> Vec<SegId> {
        let mut segs = Vec::new();
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = &self[&id];
            segs.extend(node.segments().iter().copied());
            stack.extend(node.children());
        }
        segs
    }
}
