//! The construction of a tree, replayed node by node.
//!
//! A node with `k` children owns `1 + k` consecutive checkpoints: one before descending into any
//! child and one after each child's subtree has been completed, left child first. The checkpoints
//! of a child's whole subtree sit between two checkpoints of its parent.

use crate::{Action, Checkpoint, Jumps, Stepper, TreeCheckpoint, Transition};
use derive_more::Deref;
use stab_tree::{IntervalTree, NodeId, SegId};

/// Which child subtrees of the node are complete at a checkpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Finished {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildCheckpoint {
    pub jumps: Jumps<Action>,
    pub node: NodeId,
    pub finished: Finished,
    /// every interval stored at the node, ascending by left endpoint
    pub involved: Vec<SegId>,
}

impl Checkpoint for BuildCheckpoint {
    type Action = Action;
    fn jumps(&self) -> &Jumps<Action> {
        &self.jumps
    }
}

impl TreeCheckpoint for BuildCheckpoint {
    fn node(&self) -> NodeId {
        self.node
    }
    fn involved(&self) -> &[SegId] {
        &self.involved
    }
}

#[derive(Debug, Clone, Deref)]
pub struct BuildNavigator {
    stepper: Stepper<BuildCheckpoint>,
}

impl BuildNavigator {
    pub fn new<T>(tree: &IntervalTree<T>) -> Self {
        let mut graph = Vec::new();
        let own = walk(tree, tree.root(), &mut graph);
        // from anywhere on the root, finishing means finishing everything
        let last = graph.len() - 1;
        for &idx in &own[..own.len() - 1] {
            graph[idx].jumps.insert(Action::FinishSubtree, last);
        }
        log::debug!("build walk over {} nodes has {} checkpoints", tree.len(), graph.len());
        BuildNavigator { stepper: Stepper::new(graph) }
    }

    pub fn perform(&mut self, action: Action) -> Transition {
        let transition = self.stepper.perform(action);
        log::trace!("build: {} {} -> {}", action, transition.from, transition.to);
        transition
    }

    /// The move that replays the construction one checkpoint at a time: descend when there is
    /// a child left to visit, otherwise complete the current subtree.
    pub fn step(&mut self) -> Transition {
        if self.can_perform(Action::Recurse) {
            self.perform(Action::Recurse)
        } else {
            self.perform(Action::FinishSubtree)
        }
    }
}

/// Appends the checkpoints of the subtree at `id` to `graph` and returns the indices of the
/// checkpoints owned by `id` itself. Each child's checkpoints are wired back to this node before
/// returning.
fn walk<T>(tree: &IntervalTree<T>, id: NodeId, graph: &mut Vec<BuildCheckpoint>) -> Vec<usize> {
    let node = &tree[&id];
    let mut finished = Finished::default();
    let push = |graph: &mut Vec<BuildCheckpoint>, finished: Finished| {
        graph.push(BuildCheckpoint {
            jumps: Jumps::default(),
            node: id,
            finished,
            involved: node.sorted_by_left.clone(),
        });
        graph.len() - 1
    };

    let mut own = vec![push(graph, finished)];
    let children = node.left.map(|c| (c, true)).into_iter().chain(node.right.map(|c| (c, false)));
    for (child, is_left) in children {
        let before = own[own.len() - 1];
        let next = graph.len();
        graph[before].jumps.insert(Action::Recurse, next);
        let child_own = walk(tree, child, graph);
        let after = graph.len();
        graph[child_own[0]].jumps.insert(Action::UndoRecurse, before);
        for idx in child_own {
            graph[idx].jumps.insert(Action::FinishSubtree, after);
        }
        if is_left {
            finished.left = true;
        } else {
            finished.right = true;
        }
        own.push(push(graph, finished));
    }
    own
}
