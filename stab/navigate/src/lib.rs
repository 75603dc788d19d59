//! Navigators turn a recursive walk over a stabbing tree into a flat sequence of checkpoints.
//!
//! The sequence and its jump table are computed once; afterwards moving forward, backward or
//! skipping ahead is a single cursor assignment.

pub mod err;
pub mod action;
pub mod stepper;
pub mod build;
pub mod query;


pub use action::Action;
pub use build::{BuildCheckpoint, BuildNavigator, Finished};
pub use err::*;
pub use query::{QueryCheckpoint, QueryNavigator};
pub use stepper::{Checkpoint, Jumps, Stepper, TreeCheckpoint, Transition};

use derive_more::From;
use stab_tree::{NodeId, SegId};
use std::collections::BTreeSet;

/// The record under a navigator's cursor.
#[derive(Debug, Clone, Copy)]
pub enum Record<'a> {
    Build(&'a BuildCheckpoint),
    Query(&'a QueryCheckpoint),
}

/// Whichever navigator is currently driving the walk.
#[derive(Debug, Clone, From)]
pub enum Navigator {
    Build(BuildNavigator),
    Query(QueryNavigator),
}

impl Navigator {
    pub fn can_perform(&self, action: Action) -> bool {
        match self {
            | Navigator::Build(nav) => nav.can_perform(action),
            | Navigator::Query(nav) => nav.can_perform(action),
        }
    }
    pub fn perform(&mut self, action: Action) -> Transition {
        match self {
            | Navigator::Build(nav) => nav.perform(action),
            | Navigator::Query(nav) => nav.perform(action),
        }
    }
    /// One checkpoint forward: the build walk's [`BuildNavigator::step`], or the next node of a
    /// query descent.
    pub fn step(&mut self) -> Transition {
        match self {
            | Navigator::Build(nav) => nav.step(),
            | Navigator::Query(nav) => nav.perform(Action::Recurse),
        }
    }
    /// Actions available at the current checkpoint.
    pub fn available(&self) -> Vec<Action> {
        Action::ALL.into_iter().filter(|action| self.can_perform(*action)).collect()
    }
    pub fn current(&self) -> Record<'_> {
        match self {
            | Navigator::Build(nav) => Record::Build(nav.current()),
            | Navigator::Query(nav) => Record::Query(nav.current()),
        }
    }
    pub fn cursor(&self) -> usize {
        match self {
            | Navigator::Build(nav) => nav.cursor(),
            | Navigator::Query(nav) => nav.cursor(),
        }
    }
    pub fn len(&self) -> usize {
        match self {
            | Navigator::Build(nav) => nav.len(),
            | Navigator::Query(nav) => nav.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn current_node(&self) -> NodeId {
        match self {
            | Navigator::Build(nav) => nav.current().node,
            | Navigator::Query(nav) => nav.current().node,
        }
    }
    pub fn current_involved(&self) -> &[SegId] {
        match self {
            | Navigator::Build(nav) => &nav.current().involved,
            | Navigator::Query(nav) => &nav.current().involved,
        }
    }
    /// Tree nodes of the checkpoints a transition moved onto.
    pub fn entered_nodes(&self, transition: &Transition) -> BTreeSet<NodeId> {
        match self {
            | Navigator::Build(nav) => nav.nodes_within(transition.entered()),
            | Navigator::Query(nav) => nav.nodes_within(transition.entered()),
        }
    }
    /// Tree nodes of the checkpoints a transition moved off.
    pub fn exited_nodes(&self, transition: &Transition) -> BTreeSet<NodeId> {
        match self {
            | Navigator::Build(nav) => nav.nodes_within(transition.exited()),
            | Navigator::Query(nav) => nav.nodes_within(transition.exited()),
        }
    }
}
