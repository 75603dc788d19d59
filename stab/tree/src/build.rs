//! Construction of the tree.
//!
//! The input is sorted exactly twice, ascending by left endpoint and descending by right
//! endpoint. Each node splits both orderings with stable filters, so the children receive lists
//! that are already sorted and no level ever sorts again. The median of a node is found by
//! merging the two sorted endpoint streams from their small ends.

use crate::*;
use stab_utils::arena::ArenaDense;
use std::cmp::Ordering;

impl<T> IntervalTree<T> {
    /// Builds the tree over `intervals`, which must not be empty. Intervals whose endpoints are
    /// stored in reverse are taken with their endpoints swapped.
    pub fn build(intervals: impl IntoIterator<Item = Interval<T>>) -> Result<Self> {
        let segments: ArenaDense<SegId, Interval<T>> = intervals
            .into_iter()
            .map(|Interval { left, right, id }| Interval::new(left, right, id))
            .collect();
        if segments.is_empty() {
            return Err(TreeError::InvalidInput);
        }

        let mut sorted_by_left = segments.ids().collect::<Vec<_>>();
        sorted_by_left.sort_by(|a, b| segments[a].left.total_cmp(&segments[b].left));
        let mut sorted_by_right = segments.ids().collect::<Vec<_>>();
        sorted_by_right.sort_by(|a, b| segments[b].right.total_cmp(&segments[a].right));

        let mut builder = Builder { segments: &segments, nodes: ArenaDense::new() };
        let Some(root) = builder.make_node(None, sorted_by_left, sorted_by_right, 0, 0) else {
            return Err(TreeError::InvalidInput);
        };
        let nodes = builder.nodes;
        let height = nodes[&root].height;

        let mut layout = vec![None; (1 << height) - 1];
        for (id, node) in &nodes {
            layout[node.slot()] = Some(id);
        }
        log::debug!(
            "built interval tree over {} intervals: {} nodes, height {}",
            segments.len(),
            nodes.len(),
            height
        );

        Ok(IntervalTree { segments, nodes, layout, root, height })
    }
}

struct Builder<'a, T> {
    segments: &'a ArenaDense<SegId, Interval<T>>,
    nodes: ArenaDense<NodeId, TreeNode>,
}

impl<'a, T> Builder<'a, T> {
    /// Builds the subtree for the intervals in `sorted_by_left` / `sorted_by_right`, which hold
    /// the same intervals in the two orders. No node is produced for an empty set.
    fn make_node(
        &mut self, parent: Option<NodeId>, sorted_by_left: Vec<SegId>,
        sorted_by_right: Vec<SegId>, depth: usize, peer: usize,
    ) -> Option<NodeId> {
        if sorted_by_left.is_empty() {
            return None;
        }

        let median = self.median(&sorted_by_left, &sorted_by_right);
        let (ll, stored_by_left, rl) = self.split(sorted_by_left, median);
        let (lr, stored_by_right, rr) = self.split(sorted_by_right, median);
        log::trace!(
            "node at depth {} peer {}: median {}, {} stored, {} left, {} right",
            depth,
            peer,
            median,
            stored_by_left.len(),
            ll.len(),
            rl.len()
        );

        let id = self.nodes.alloc(TreeNode {
            parent,
            left: None,
            right: None,
            depth,
            peer,
            height: 1,
            median,
            sorted_by_left: stored_by_left,
            sorted_by_right: stored_by_right,
        });

        let left = self.make_node(Some(id), ll, lr, depth + 1, peer * 2);
        let right = self.make_node(Some(id), rl, rr, depth + 1, peer * 2 + 1);
        let height = 1 + left.iter().chain(&right).map(|c| self.nodes[c].height).max().unwrap_or(0);

        let node = &mut self.nodes[&id];
        node.left = left;
        node.right = right;
        node.height = height;
        Some(id)
    }

    /// The lower median of the `2n` endpoints, i.e. the `n`-th smallest, found by merging the
    /// ascending left endpoints with the right endpoints read from the back of the descending
    /// list. Ties are taken from the right endpoints.
    fn median(&self, sorted_by_left: &[SegId], sorted_by_right: &[SegId]) -> f64 {
        let n = sorted_by_left.len();
        let (mut il, mut ir) = (0, n);
        let mut median = 0.0;
        for _ in 0..n {
            let xl = sorted_by_left.get(il).map(|s| self.segments[s].left);
            let xr = ir.checked_sub(1).map(|i| self.segments[&sorted_by_right[i]].right);
            match (xl, xr) {
                | (Some(l), Some(r)) if l < r => {
                    median = l;
                    il += 1;
                }
                | (_, Some(r)) => {
                    median = r;
                    ir -= 1;
                }
                | (Some(l), None) => {
                    median = l;
                    il += 1;
                }
                | (None, None) => break,
            }
        }
        median
    }

    /// Stable three-way split into (entirely left of, containing, entirely right of) `median`.
    fn split(&self, sorted: Vec<SegId>, median: f64) -> (Vec<SegId>, Vec<SegId>, Vec<SegId>) {
        let (mut left, mut stored, mut right) = (Vec::new(), Vec::new(), Vec::new());
        for seg in sorted {
            match self.segments[&seg].relation(median) {
                | Ordering::Less => left.push(seg),
                | Ordering::Equal => stored.push(seg),
                | Ordering::Greater => right.push(seg),
            }
        }
        (left, stored, right)
    }
}
