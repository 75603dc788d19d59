use crate::*;
use std::cmp::Ordering;

/// One node visited while descending towards a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub node: NodeId,
    /// how the query point compares to the node's median
    pub side: Ordering,
    /// the intervals stored at this node that contain the query point, ascending by left endpoint
    pub involved: Vec<SegId>,
}

impl<T> IntervalTree<T> {
    /// The root-to-leaf path followed by a stabbing query at `x`.
    ///
    /// Below the median only the left endpoints of the stored intervals need checking, above it
    /// only the right endpoints; at the median every stored interval is stabbed and the descent
    /// stops. A NaN query point stabs nothing and yields an empty path.
    pub fn descend(&self, x: f64) -> Vec<Visit> {
        let mut path = Vec::new();
        if x.is_nan() {
            return path;
        }
        let mut next = Some(self.root);
        while let Some(id) = next {
            let node = &self[&id];
            let side = x.total_cmp(&node.median);
            let stored = node.sorted_by_left.iter().copied();
            let (involved, child) = match side {
                | Ordering::Less => {
                    (stored.filter(|s| self[s].left <= x).collect(), node.left)
                }
                | Ordering::Greater => {
                    (stored.filter(|s| self[s].right >= x).collect(), node.right)
                }
                | Ordering::Equal => (stored.collect(), None),
            };
            path.push(Visit { node: id, side, involved });
            next = child;
        }
        path
    }

    /// All intervals containing `x`, each exactly once.
    pub fn stab(&self, x: f64) -> Vec<SegId> {
        self.descend(x).into_iter().flat_map(|visit| visit.involved).collect()
    }
}
