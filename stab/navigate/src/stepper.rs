use derive_more::{Deref, DerefMut};
use stab_tree::{NodeId, SegId};
use std::{collections::BTreeSet, collections::HashMap, hash::Hash, ops::Range};

/// Where each action leads from one checkpoint; actions absent from the table are unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Deref, DerefMut)]
pub struct Jumps<A: Eq + Hash>(HashMap<A, usize>);

impl<A: Eq + Hash> Default for Jumps<A> {
    fn default() -> Self {
        Jumps(HashMap::new())
    }
}

impl<A: Eq + Hash> FromIterator<(A, usize)> for Jumps<A> {
    fn from_iter<I: IntoIterator<Item = (A, usize)>>(iter: I) -> Self {
        Jumps(iter.into_iter().collect())
    }
}

pub trait Checkpoint {
    type Action: Copy + Eq + Hash + std::fmt::Debug;
    fn jumps(&self) -> &Jumps<Self::Action>;
}

/// A checkpoint that sits on a tree node.
pub trait TreeCheckpoint: Checkpoint {
    fn node(&self) -> NodeId;
    fn involved(&self) -> &[SegId];
}

/// A cursor move: `from` and `to` are checkpoint indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
    /// Checkpoints newly reached by a forward move: everything after `from` up to `to`.
    pub fn entered(&self) -> Range<usize> {
        if self.to > self.from { self.from + 1..self.to + 1 } else { 0..0 }
    }
    /// Checkpoints left behind by a backward move: everything after `to` up to `from`.
    pub fn exited(&self) -> Range<usize> {
        if self.to < self.from { self.to + 1..self.from + 1 } else { 0..0 }
    }
}

/// A fixed graph of checkpoints plus the one piece of mutable state, the cursor.
#[derive(Debug, Clone)]
pub struct Stepper<R> {
    graph: Box<[R]>,
    cursor: usize,
}

impl<R: Checkpoint> Stepper<R> {
    /// Starts at the first checkpoint of `graph`, which must not be empty.
    pub fn new(graph: Vec<R>) -> Self {
        assert!(!graph.is_empty(), "a stepper needs at least one checkpoint");
        Stepper { graph: graph.into_boxed_slice(), cursor: 0 }
    }

    pub fn can_perform(&self, action: R::Action) -> bool {
        self.current().jumps().contains_key(&action)
    }

    /// Follows `action` from the current checkpoint; does nothing when it is unavailable.
    pub fn perform(&mut self, action: R::Action) -> Transition {
        let from = self.cursor;
        if let Some(&to) = self.current().jumps().get(&action) {
            self.cursor = to;
        }
        Transition { from, to: self.cursor }
    }

    pub fn current(&self) -> &R {
        &self.graph[self.cursor]
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn graph(&self) -> &[R] {
        &self.graph
    }
    pub fn len(&self) -> usize {
        self.graph.len()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 == self.graph.len()
    }
}

impl<R: TreeCheckpoint> Stepper<R> {
    pub fn nodes_within(&self, range: Range<usize>) -> BTreeSet<NodeId> {
        self.graph[range].iter().map(|r| r.node()).collect()
    }
}
