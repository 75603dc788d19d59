//! A static interval ("stabbing") tree.
//!
//! Every node stores the intervals that contain its median, twice: once ascending by the left
//! endpoint and once descending by the right endpoint. Intervals entirely to the left of the
//! median go to the left subtree and intervals entirely to the right go to the right subtree.
//! The median is the lower median of all endpoints reaching the node, so each child receives at
//! most half of its parent's intervals.

pub mod err;
pub mod interval;
pub mod node;
pub mod build;
pub mod traverse;
pub mod query;

#[cfg(test)]
mod tests;

pub use err::*;
pub use interval::Interval;
pub use node::TreeNode;
pub use query::Visit;

use stab_utils::prelude::*;

new_key_type! {
    /// A node of the tree; ids are handed out in pre-order, so the root is always the first.
    pub struct NodeId;
    /// An interval handed to the tree at construction time, in input order.
    pub struct SegId;
}

/// A stabbing tree built once from a non-empty set of intervals and immutable afterwards.
#[derive(Debug, Clone)]
pub struct IntervalTree<T> {
    /// the input intervals, in the order they were supplied
    segments: ArenaDense<SegId, Interval<T>>,
    nodes: ArenaDense<NodeId, TreeNode>,
    /// sparse flat layout; a node lives at `(1 << depth) - 1 + peer`
    layout: Vec<Option<NodeId>>,
    root: NodeId,
    height: usize,
}

impl<T> IntervalTree<T> {
    pub fn root(&self) -> NodeId {
        self.root
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn nodes(&self) -> &ArenaDense<NodeId, TreeNode> {
        &self.nodes
    }
    pub fn segments(&self) -> &ArenaDense<SegId, Interval<T>> {
        &self.segments
    }
    pub fn get(&self, id: &NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }
    pub fn layout(&self) -> &[Option<NodeId>] {
        &self.layout
    }
    /// The node at `depth` with position `peer` among its same-depth siblings, if any.
    pub fn slot(&self, depth: usize, peer: usize) -> Option<NodeId> {
        let first = 1usize.checked_shl(depth as u32)? - 1;
        if peer > first {
            return None;
        }
        self.layout.get(first + peer).copied().flatten()
    }
}

impl<T> std::ops::Index<&NodeId> for IntervalTree<T> {
    type Output = TreeNode;
    fn index(&self, id: &NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}

impl<T> std::ops::Index<&SegId> for IntervalTree<T> {
    type Output = Interval<T>;
    fn index(&self, id: &SegId) -> &Self::Output {
        &self.segments[id]
    }
}
