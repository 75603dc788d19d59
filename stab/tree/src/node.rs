use crate::{NodeId, SegId};

#[derive(Debug, Clone)]
pub struct TreeNode {
    /// back-reference; `None` for the root
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    /// 0 at the root
    pub depth: usize,
    /// position among the nodes of the same depth; children sit at `2 * peer` and `2 * peer + 1`
    pub peer: usize,
    /// 1 for a node without children
    pub height: usize,
    pub median: f64,
    /// intervals containing the median, ascending by left endpoint
    pub sorted_by_left: Vec<SegId>,
    /// the same intervals, descending by right endpoint
    pub sorted_by_right: Vec<SegId>,
}

impl TreeNode {
    /// Existing children, left before right.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + use<> {
        self.left.into_iter().chain(self.right)
    }
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
    /// Index of this node in the flat layout.
    pub fn slot(&self) -> usize {
        (1 << self.depth) - 1 + self.peer
    }
    /// Intervals stored at this node.
    pub fn segments(&self) -> &[SegId] {
        &self.sorted_by_left
    }
}
