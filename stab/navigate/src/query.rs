use crate::{Action, Checkpoint, Jumps, NavError, Result, Stepper, TreeCheckpoint, Transition};
use derive_more::Deref;
use stab_tree::{IntervalTree, NodeId, SegId, Visit};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCheckpoint {
    pub jumps: Jumps<Action>,
    pub node: NodeId,
    /// how the query point compares to the node's median
    pub side: Ordering,
    /// the intervals stored at the node that contain the query point
    pub involved: Vec<SegId>,
}

impl Checkpoint for QueryCheckpoint {
    type Action = Action;
    fn jumps(&self) -> &Jumps<Action> {
        &self.jumps
    }
}

impl TreeCheckpoint for QueryCheckpoint {
    fn node(&self) -> NodeId {
        self.node
    }
    fn involved(&self) -> &[SegId] {
        &self.involved
    }
}

/// The descent of one stabbing query, one checkpoint per visited node. The path is linear, so
/// there is never a subtree to finish.
#[derive(Debug, Clone, Deref)]
pub struct QueryNavigator {
    #[deref]
    stepper: Stepper<QueryCheckpoint>,
    x: f64,
}

impl QueryNavigator {
    /// Fails on a NaN query point, which has no descent.
    pub fn new<T>(tree: &IntervalTree<T>, x: f64) -> Result<Self> {
        if x.is_nan() {
            return Err(NavError::InvalidQuery(x.to_string()));
        }
        let path = tree.descend(x);
        let len = path.len();
        let graph = path
            .into_iter()
            .enumerate()
            .map(|(i, Visit { node, side, involved })| {
                let mut jumps = Jumps::default();
                if i + 1 < len {
                    jumps.insert(Action::Recurse, i + 1);
                }
                if i > 0 {
                    jumps.insert(Action::UndoRecurse, i - 1);
                }
                QueryCheckpoint { jumps, node, side, involved }
            })
            .collect();
        log::debug!("query at {} descends through {} nodes", x, len);
        Ok(QueryNavigator { stepper: Stepper::new(graph), x })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn perform(&mut self, action: Action) -> Transition {
        let transition = self.stepper.perform(action);
        log::trace!("query: {} {} -> {}", action, transition.from, transition.to);
        transition
    }

    /// Intervals found so far, up to and including the current checkpoint.
    pub fn found(&self) -> Vec<SegId> {
        self.graph()[..=self.cursor()].iter().flat_map(|r| r.involved.iter().copied()).collect()
    }

    /// Every interval containing the query point.
    pub fn hits(&self) -> Vec<SegId> {
        self.graph().iter().flat_map(|r| r.involved.iter().copied()).collect()
    }
}
